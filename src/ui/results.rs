//! Collapsible per-category results panel

use eframe::egui;

use crate::app::WriteableApp;

/// Analysis results panel
pub struct ResultsPanel;

impl ResultsPanel {
    /// Show the results sections
    pub fn show(ui: &mut egui::Ui, app: &WriteableApp) {
        let results = match app.results {
            Some(ref results) => results,
            None => return,
        };

        ui.heading("Analysis Results");
        ui.label("Review the findings from your document analysis below.");
        ui.add_space(6.0);

        for (category, issues) in results.iter() {
            egui::CollapsingHeader::new(category.label())
                .default_open(false)
                .show(ui, |ui| {
                    if issues.is_empty() {
                        ui.weak("No issues found.");
                    } else {
                        for issue in issues {
                            ui.label(format!("- {}", issue));
                        }
                    }
                });
        }
    }
}
