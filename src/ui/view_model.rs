//! Drives one lookup at a time and publishes the resulting view state.

use tokio::sync::watch;

use crate::lookup::UserLookupService;
use crate::ui::lookup::{LookupIntent, LookupReducer, LookupState};
use crate::ui::mvi::Reducer;

/// Owner of the lookup screen's state.
///
/// Every transition goes through [`LookupReducer`]; the result is published
/// on a watch channel so any number of views can render it reactively.
///
/// Overlapping `fetch()` calls are not coordinated: whichever lookup
/// resolves last writes its outcome, even if it was issued first.
pub struct UserLookupViewModel {
    service: UserLookupService,
    state: watch::Sender<LookupState>,
}

impl UserLookupViewModel {
    pub fn new(service: UserLookupService) -> Self {
        let (state, _) = watch::channel(LookupState::default());
        Self { service, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LookupState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    pub fn set_query_text(&self, text: impl Into<String>) {
        self.dispatch(LookupIntent::QueryChanged(text.into()));
    }

    /// Look up the current query text.
    ///
    /// Never fails: the outcome lands in `result` or `error_text`, and
    /// `is_loading` is cleared before this returns.
    pub async fn fetch(&self) {
        self.dispatch(LookupIntent::FetchStarted);
        let username = self.state.borrow().query_text.clone();

        let outcome = match self.service.fetch_user(&username).await {
            Ok(user) => LookupIntent::FetchSucceeded(user),
            Err(err) => {
                let message = err.user_message().unwrap_or_else(|| err.to_string());
                LookupIntent::FetchFailed(message)
            }
        };

        self.dispatch(outcome);
        self.dispatch(LookupIntent::FetchFinished);
    }

    fn dispatch(&self, intent: LookupIntent) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = LookupReducer::reduce(current, intent);
        });
    }
}
