//! Preview of the captured upload's extracted content

use eframe::egui;
use egui_commonmark::CommonMarkViewer;

use crate::app::WriteableApp;
use crate::core::upload::UploadCategory;

/// Extracted-content preview panel
pub struct DocumentPreview;

impl DocumentPreview {
    /// Show the preview section for the captured upload
    pub fn show(ui: &mut egui::Ui, app: &mut WriteableApp) {
        // Get content first to avoid borrow conflicts
        let upload = match app.upload {
            Some(ref doc) => doc.clone(),
            None => return,
        };

        egui::CollapsingHeader::new("Document preview")
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("document_preview_scroll")
                    .max_height(260.0)
                    .show(ui, |ui| {
                        if upload.content.is_empty() {
                            Self::show_empty(ui);
                        } else if upload.category == UploadCategory::Markdown {
                            CommonMarkViewer::new().show(
                                ui,
                                &mut app.commonmark_cache,
                                &upload.content,
                            );
                        } else {
                            ui.label(egui::RichText::new(&upload.content).monospace());
                        }
                    });
            });
    }

    /// Show empty state
    fn show_empty(ui: &mut egui::Ui) {
        ui.weak("The uploaded document is empty.");
    }
}
