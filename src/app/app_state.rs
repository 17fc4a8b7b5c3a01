//! Centralized application state for the demo viewer.
//!
//! The viewer is deliberately stateless beyond the scene it displays: the
//! widgets are pure renderers, so the only state is the loaded scene, where
//! it came from, and an error banner for a failed load.

use std::path::PathBuf;

use dotboard::Scene;

/// Marker count of the built-in scatter scene.
const SAMPLE_COUNT: usize = 8;

/// Seed of the built-in scatter scene, for reproducible demo runs.
const SAMPLE_SEED: u64 = 42;

/// State of the demo viewer.
pub struct AppState {
    /// The scene currently on display.
    pub scene: Scene,

    /// Path of the loaded scene file, if one was given.
    pub scene_path: Option<PathBuf>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the state with the built-in scatter scene.
    pub fn new() -> Self {
        Self {
            scene: Scene::scatter(SAMPLE_COUNT, SAMPLE_SEED),
            scene_path: None,
            error_message: None,
        }
    }

    /// Creates the state from a scene file.
    ///
    /// A failed load keeps the app running with an empty scene and the error
    /// shown in the canvas banner.
    pub fn from_file(path: PathBuf) -> Self {
        match Scene::load(&path) {
            Ok(scene) => Self {
                scene,
                scene_path: Some(path),
                error_message: None,
            },
            Err(err) => Self {
                scene: Scene::default(),
                scene_path: Some(path),
                error_message: Some(format!("{:#}", err)),
            },
        }
    }

    /// Human-readable label for where the scene came from.
    pub fn source_label(&self) -> String {
        match &self.scene_path {
            Some(path) => path.display().to_string(),
            None => format!("scatter scene (seed {})", SAMPLE_SEED),
        }
    }
}
