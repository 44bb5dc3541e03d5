//! View state for the profile lookup screen.

use crate::lookup::UserRecord;
use crate::ui::mvi::UiState;

/// Everything the lookup screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupState {
    /// Current contents of the username field.
    pub query_text: String,
    pub is_loading: bool,
    /// Profile from the last successful lookup.
    pub result: Option<UserRecord>,
    /// Message from the last failed lookup.
    pub error_text: Option<String>,
}

impl UiState for LookupState {}

impl LookupState {
    /// Nothing fetched yet and nothing in flight.
    pub fn is_idle(&self) -> bool {
        !self.is_loading && self.result.is_none() && self.error_text.is_none()
    }

    /// Last lookup finished with an error.
    pub fn has_error(&self) -> bool {
        self.error_text.is_some()
    }
}
