//! Header row with logo and page title

use eframe::egui;

use crate::app::PAGE_TITLE;

/// Logo asset, expected in the working directory.
const LOGO_URI: &str = "file://logo.png";

/// Header panel
pub struct HeaderPanel;

impl HeaderPanel {
    /// Show the header row
    pub fn show(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // A missing logo file surfaces as the image loader's error state
            ui.add(egui::Image::new(LOGO_URI).max_width(140.0));
            ui.add_space(16.0);

            ui.vertical(|ui| {
                ui.add_space(10.0);
                ui.heading(egui::RichText::new(PAGE_TITLE).size(30.0));
            });
        });
    }
}
