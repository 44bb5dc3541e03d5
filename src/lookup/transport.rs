//! Transport seam for the lookup service.

use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;

/// Raw response handed back by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub body: Vec<u8>,
    /// HTTP status code. `None` when the transport produced a response
    /// without HTTP metadata.
    pub status: Option<u16>,
}

impl TransportResponse {
    /// Response carrying an HTTP status.
    pub fn http(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            status: Some(status),
        }
    }
}

/// Failures raised by a transport before any response was produced.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The network is unreachable (no route, DNS unavailable, offline).
    #[error("Not connected to the internet: {message}")]
    NotConnected { message: String },

    /// Request could not complete for any other reason.
    ///
    /// For transports not built on `reqwest`; [`ReqwestTransport`] reports
    /// client errors through [`TransportError::Http`] instead.
    ///
    /// [`ReqwestTransport`]: super::ReqwestTransport
    #[error("{message}")]
    Failed { message: String },

    /// Error raised by the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    /// Whether this failure means connectivity is unavailable.
    pub fn is_not_connected(&self) -> bool {
        matches!(self, TransportError::NotConnected { .. })
    }
}

/// Capability to perform a single GET request.
///
/// The lookup service never talks to the network directly; swapping this
/// trait object is how tests substitute canned responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET and return the body together with status metadata.
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}
