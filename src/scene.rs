//! Demo scene model: marker placements plus sidebar descriptions.
//!
//! A scene is plain data consumed by the demo binaries; the widgets
//! themselves never touch it. Scenes come from a JSON file or from the
//! built-in seeded scatter generator.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::parse_color;
use crate::style::{DotStyle, DEFAULT_DIAMETER, DEFAULT_FILL};

/// Canvas extent the scatter generator places markers within.
const SCATTER_BOUNDS: (f32, f32) = (640.0, 480.0);

/// Color names the scatter generator draws from.
const SCATTER_COLORS: &[&str] = &[
    "red", "blue", "green", "orange", "purple", "cyan", "magenta", "yellow",
];

fn default_diameter() -> f32 {
    DEFAULT_DIAMETER
}

fn default_fill() -> String {
    DEFAULT_FILL.to_string()
}

/// One marker placement in a scene.
///
/// `diameter` and `color` are optional in the file and default to the
/// marker's unstyled appearance (10 pt, red). `x`/`y` are the marker's
/// anchor point, offset from the canvas origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_diameter")]
    pub diameter: f32,
    #[serde(default = "default_fill")]
    pub color: String,
}

impl MarkerSpec {
    /// Derives the visual style for this marker.
    pub fn style(&self) -> DotStyle {
        DotStyle::new(self.diameter, parse_color(&self.color))
    }
}

/// A demo scene: markers to paint and descriptions to list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub markers: Vec<MarkerSpec>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl Scene {
    /// Loads a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        let scene = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse scene file {}", path.display()))?;
        Ok(scene)
    }

    /// Generates a deterministic pseudo-random scene.
    ///
    /// The same `count` and `seed` always produce the same scene, so demo
    /// runs and generated files are reproducible.
    pub fn scatter(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (max_x, max_y) = SCATTER_BOUNDS;

        let mut markers = Vec::with_capacity(count);
        let mut descriptions = Vec::with_capacity(count);

        for _ in 0..count {
            let color = SCATTER_COLORS[rng.gen_range(0..SCATTER_COLORS.len())];
            let marker = MarkerSpec {
                x: rng.gen_range(20.0..max_x - 20.0),
                y: rng.gen_range(20.0..max_y - 20.0),
                diameter: rng.gen_range(6..=24) as f32,
                color: color.to_string(),
            };
            descriptions.push(format!(
                "{} marker, {} pt at ({:.0}, {:.0})",
                color, marker.diameter, marker.x, marker.y
            ));
            markers.push(marker);
        }

        Self {
            markers,
            descriptions,
        }
    }
}
