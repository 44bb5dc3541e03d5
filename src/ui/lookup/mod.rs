//! Profile lookup screen.
//!
//! - `state.rs` - view state
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::LookupIntent;
pub use reducer::LookupReducer;
pub use state::LookupState;
