//! Application-level modules for the dotboard demo viewer.
//!
//! This module contains the centralized state for the demo application.

mod app_state;

pub use app_state::AppState;
