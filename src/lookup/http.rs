//! `reqwest`-backed transport.

use std::error::Error as StdError;
use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::ApiConfig;

use super::transport::{Transport, TransportError, TransportResponse};

/// Production transport over a pooled `reqwest::Client`.
///
/// Timeouts and the User-Agent come from [`ApiConfig`]; the lookup layer
/// itself enforces none.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify)?.to_vec();

        tracing::debug!(status, bytes = body.len(), "Directory response received");

        Ok(TransportResponse::http(status, body))
    }
}

/// Split client errors into "offline" and everything else.
///
/// Only connect-phase failures that say nothing about the server count as
/// offline: name resolution failed, the connect timed out, or the OS
/// reported the network or host unreachable. TLS, protocol and refused
/// connections propagate as client errors.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() && (err.is_timeout() || offline_cause(&err)) {
        return TransportError::NotConnected {
            message: err.to_string(),
        };
    }
    TransportError::Http(err)
}

fn offline_cause(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if is_offline_kind(io.kind()) {
                return true;
            }
        }
        // hyper-util's connector labels resolver failures this way.
        if cause.to_string().starts_with("dns error") {
            return true;
        }
        source = cause.source();
    }
    false
}

fn is_offline_kind(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NetworkUnreachable | ErrorKind::HostUnreachable | ErrorKind::NetworkDown
    )
}
