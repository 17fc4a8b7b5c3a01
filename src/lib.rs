pub mod color;
pub mod style;
pub mod scene;
pub mod rendering;

// Export color parsing
pub use color::{hex_to_color32, parse_color};

// Export marker styling
pub use style::{DotStyle, BORDER_WIDTH, DEFAULT_DIAMETER, DEFAULT_FILL, SHADOW_BLUR};

// Export the demo scene model
pub use scene::{MarkerSpec, Scene};

// Export the widget renderers
pub use rendering::dot_renderer::paint_dot;
pub use rendering::sidebar_renderer::{render_descriptions, SIDEBAR_HEADING};
