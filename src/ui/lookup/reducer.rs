//! Reducer for the profile lookup screen.

use crate::ui::mvi::Reducer;

use super::intent::LookupIntent;
use super::state::LookupState;

pub struct LookupReducer;

impl Reducer for LookupReducer {
    type State = LookupState;
    type Intent = LookupIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LookupIntent::QueryChanged(query_text) => LookupState { query_text, ..state },

            LookupIntent::FetchStarted => LookupState {
                is_loading: true,
                result: None,
                error_text: None,
                ..state
            },

            LookupIntent::FetchSucceeded(user) => LookupState {
                result: Some(user),
                error_text: None,
                ..state
            },

            LookupIntent::FetchFailed(message) => LookupState {
                result: None,
                error_text: Some(message),
                ..state
            },

            LookupIntent::FetchFinished => LookupState {
                is_loading: false,
                ..state
            },
        }
    }
}
