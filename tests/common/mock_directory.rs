//! Mock user-directory servers for exercising the real HTTP transport.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    /// Raw path, still percent-encoded.
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and JSON body returned for every request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"message": "{}"}}"#, message),
        }
    }
}

#[derive(Clone)]
struct MockState {
    response: MockResponse,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Directory server answering every path with one canned response.
///
/// The server task lives as long as the test's runtime.
pub struct MockDirectory {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockDirectory {
    pub async fn start(response: MockResponse) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            response,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.ok() });

        Self { addr, requests }
    }

    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Per-user endpoint base on this server.
    pub fn users_url(&self) -> String {
        format!("http://{}/users/", self.addr)
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let headers = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    state.requests.lock().unwrap().push(CapturedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        headers,
    });

    Response::builder()
        .status(StatusCode::from_u16(state.response.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(state.response.body.clone()))
        .unwrap()
}

/// Plain TCP server that writes a cleartext HTTP response to every
/// connection, regardless of what the client sends. Returns its address.
pub async fn start_plaintext_responder() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind plaintext responder");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\n\r\n{}")
                .await;
        }
    });

    addr
}
