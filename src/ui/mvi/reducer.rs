//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// Implementations must be pure: no I/O, no clocks, no shared state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
