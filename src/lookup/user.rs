//! Decoded shape of a directory profile.

use serde::{Deserialize, Serialize};

/// A public profile as returned by the user-directory API.
///
/// Only built by decoding a successful response body. `name` and `bio`
/// may be absent or `null` on the wire; the other fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique handle within the directory.
    pub login: String,
    /// Display name, if the user set one.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image address.
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    /// Number of public repositories.
    pub public_repos: u64,
    pub followers: u64,
}
