//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying the scene source and counts.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(state.source_label()).strong());
        ui.label(RichText::new("|").strong());
        ui.label(format!("Markers: {}", state.scene.markers.len()));
        ui.label(RichText::new("|").strong());
        ui.label(format!("Descriptions: {}", state.scene.descriptions.len()));
    });
}
