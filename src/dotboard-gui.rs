//! Dotboard Demo Viewer
//!
//! This binary mounts the two dotboard widgets in an egui window:
//! - Left sidebar listing the scene's descriptions
//! - Central canvas with one circular marker per scene entry
//! - Bottom status bar with the scene source and counts
//!
//! The viewer holds no interactive state: the widgets are pure renderers,
//! and the window just displays the scene it was started with.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod ui;

use app::AppState;
use ui::{canvas_panel, status_bar};

/// Main application entry point that initializes and launches the demo viewer.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for a scene file to load
    let scene_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Dotboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Dotboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DotboardApp::new(scene_file)))),
    )
}

/// The demo viewer application.
struct DotboardApp {
    /// Centralized application state
    state: AppState,
}

impl DotboardApp {
    /// Creates a new viewer, loading the given scene file if one was passed
    /// on the command line and falling back to the built-in scatter scene.
    fn new(scene_file: Option<PathBuf>) -> Self {
        let state = match scene_file {
            Some(path) => AppState::from_file(path),
            None => AppState::new(),
        };
        Self { state }
    }
}

impl eframe::App for DotboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sidebar")
            .default_width(220.0)
            .show(ctx, |ui| {
                dotboard::render_descriptions(ui, &self.state.scene.descriptions);
            });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, &self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            canvas_panel::render_canvas(ui, &self.state);
        });
    }
}
