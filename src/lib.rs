//! Look up public user profiles from a remote directory API.

pub mod cli;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod ui;
