//! Rendering for the two widgets
//!
//! This module contains the painting logic for the widget library:
//! - Dot rendering (circular marker with border and drop shadow)
//! - Sidebar rendering (titled list of descriptions)

pub mod dot_renderer;
pub mod sidebar_renderer;
