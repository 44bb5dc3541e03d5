//! Username → profile lookup.

use std::sync::Arc;

use reqwest::Url;

use super::error::LookupError;
use super::transport::Transport;
use super::user::UserRecord;

/// Stateless lookup against the user directory.
///
/// Holds the endpoint base and an injected transport; performs exactly one
/// request per call that passes input validation, and never retries.
#[derive(Clone)]
pub struct UserLookupService {
    transport: Arc<dyn Transport>,
    base_url: Url,
}

impl UserLookupService {
    pub fn new(transport: Arc<dyn Transport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Look up `username` and decode the profile.
    pub async fn fetch_user(&self, username: &str) -> Result<UserRecord, LookupError> {
        if username.is_empty() {
            return Err(LookupError::EmptyUsername);
        }

        let url = user_url(&self.base_url, username)?;
        tracing::debug!(url = %url, "Looking up user");

        let response = self.transport.get(&url).await.map_err(|e| {
            let err = LookupError::from(e);
            tracing::warn!(kind = err.kind(), error = %err, "Transport failed");
            err
        })?;

        let Some(status) = response.status else {
            tracing::warn!("Response carried no HTTP status");
            return Err(LookupError::InvalidResponse);
        };

        match status {
            200 => serde_json::from_slice(&response.body).map_err(|e| {
                tracing::warn!(error = %e, "Failed to decode user payload");
                LookupError::DecodingError
            }),
            404 => Err(LookupError::UserNotFound),
            status_code => {
                tracing::warn!(status_code, "Unexpected directory status");
                Err(LookupError::NetworkError { status_code })
            }
        }
    }
}

/// Append `username` to `base` as a single percent-encoded path segment.
///
/// Dot segments and control characters are rejected: the URL parser would
/// collapse or strip them and silently address a different resource.
pub fn user_url(base: &Url, username: &str) -> Result<Url, LookupError> {
    if matches!(username, "." | "..") || username.chars().any(char::is_control) {
        return Err(LookupError::InvalidUrl);
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LookupError::InvalidUrl)?
        .pop_if_empty()
        .push(username);
    Ok(url)
}
