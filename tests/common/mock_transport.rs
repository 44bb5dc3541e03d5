//! In-process transport doubles.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gitpeek::lookup::{Transport, TransportError, TransportResponse};
use reqwest::Url;
use tokio::sync::Notify;

/// What a [`MockTransport`] does on every call.
#[derive(Debug, Clone)]
pub enum Scripted {
    Respond(TransportResponse),
    Offline,
    Fail(String),
}

impl Scripted {
    fn produce(&self) -> Result<TransportResponse, TransportError> {
        match self {
            Scripted::Respond(response) => Ok(response.clone()),
            Scripted::Offline => Err(TransportError::NotConnected {
                message: "The Internet connection appears to be offline.".to_string(),
            }),
            Scripted::Fail(message) => Err(TransportError::Failed {
                message: message.clone(),
            }),
        }
    }
}

/// Transport returning the same canned outcome for every request.
pub struct MockTransport {
    script: Scripted,
    calls: AtomicUsize,
    urls: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn new(script: Scripted) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(status: u16, body: &str) -> Self {
        Self::new(Scripted::Respond(TransportResponse::http(status, body)))
    }

    /// Response with a body but no HTTP status metadata.
    pub fn without_status(body: &str) -> Self {
        Self::new(Scripted::Respond(TransportResponse {
            body: body.as_bytes().to_vec(),
            status: None,
        }))
    }

    pub fn offline() -> Self {
        Self::new(Scripted::Offline)
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Scripted::Fail(message.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_urls(&self) -> Vec<Url> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.clone());
        self.script.produce()
    }
}

/// Transport that blocks each request until the test releases it.
pub struct GatedTransport {
    script: Scripted,
    entered: Notify,
    release: Notify,
}

impl GatedTransport {
    pub fn new(script: Scripted) -> Self {
        Self {
            script,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Resolves once a request is waiting on the gate.
    pub async fn wait_until_called(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn get(&self, _url: &Url) -> Result<TransportResponse, TransportError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.script.produce()
    }
}
