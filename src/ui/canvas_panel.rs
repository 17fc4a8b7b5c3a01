//! Canvas panel rendering
//!
//! The canvas is the positioned ancestor of every marker: each marker's
//! `(x, y)` is an offset from the canvas origin, and the dot is painted
//! centered on that point.

use eframe::egui;

use crate::app::AppState;
use dotboard::paint_dot;

/// Renders the central canvas with one dot per scene marker.
pub fn render_canvas(ui: &mut egui::Ui, state: &AppState) {
    if let Some(error) = &state.error_message {
        ui.colored_label(egui::Color32::RED, error.as_str());
    }

    let (canvas_rect, _response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    let painter = ui.painter_at(canvas_rect);

    for marker in &state.scene.markers {
        let center = canvas_rect.min + egui::vec2(marker.x, marker.y);
        paint_dot(&painter, center, &marker.style());
    }
}
