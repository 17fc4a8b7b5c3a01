//! Sidebar list rendering
//!
//! Renders a titled, ordered list of text descriptions.

use eframe::egui;

/// Heading shown above the description list.
pub const SIDEBAR_HEADING: &str = "Descriptions";

/// Renders the "Descriptions" heading followed by one label per entry.
///
/// Entries are rendered verbatim, in input order. An empty slice still
/// renders the heading, just with no items under it.
pub fn render_descriptions(ui: &mut egui::Ui, descriptions: &[String]) {
    ui.heading(SIDEBAR_HEADING);
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for text in descriptions {
            ui.label(text.as_str());
        }
    });
}
