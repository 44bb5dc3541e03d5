pub mod lookup;
pub mod mvi;
pub mod render;
pub mod view_model;

pub use render::{render_lookup, render_profile};
pub use view_model::UserLookupViewModel;
