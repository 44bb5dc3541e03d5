//! Intents for the profile lookup screen.

use crate::lookup::UserRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LookupIntent {
    /// Username field edited.
    QueryChanged(String),

    /// A lookup is about to be issued.
    FetchStarted,

    /// Lookup returned a profile.
    FetchSucceeded(UserRecord),

    /// Lookup failed; carries the text to display.
    FetchFailed(String),

    /// Lookup resolved, whatever the outcome. Always dispatched last.
    FetchFinished,
}

impl Intent for LookupIntent {}
