//! Two-column input capture: document upload and pasted text

use eframe::egui;

use crate::app::WriteableApp;
use crate::core::upload::UploadCategory;

/// Input capture panel
pub struct InputPanel;

impl InputPanel {
    /// Show the two input columns
    pub fn show(ui: &mut egui::Ui, app: &mut WriteableApp) {
        ui.columns(2, |columns| {
            Self::upload_column(&mut columns[0], app);
            Self::paste_column(&mut columns[1], app);
        });
    }

    /// Left column: file upload
    fn upload_column(ui: &mut egui::Ui, app: &mut WriteableApp) {
        ui.label("Upload a document");
        ui.add_space(4.0);

        if ui.button("Choose file\u{2026}").clicked() {
            let mut dialog =
                rfd::FileDialog::new().add_filter("Documents", &UploadCategory::EXTENSIONS);
            if let Some(ref dir) = app.config.last_upload_dir {
                dialog = dialog.set_directory(dir);
            }
            // Canceling the dialog leaves the current upload untouched
            if let Some(path) = dialog.pick_file() {
                app.capture_upload(path);
            }
        }

        ui.add_space(6.0);
        // Clone first to avoid borrow conflicts with the clear control
        if let Some(doc) = app.upload.clone() {
            ui.horizontal(|ui| {
                ui.label(format!("\u{1F4C4} {}", doc.name));
                ui.weak(doc.category.label());
                if ui.small_button("\u{2715}").on_hover_text("Remove upload").clicked() {
                    app.clear_upload();
                }
            });
        } else {
            ui.weak(format!(
                "Accepted: {}",
                UploadCategory::EXTENSIONS.join(", ")
            ));
        }
    }

    /// Right column: pasted text
    fn paste_column(ui: &mut egui::Ui, app: &mut WriteableApp) {
        ui.label("Or paste text:");
        ui.add_space(4.0);

        ui.add(
            egui::TextEdit::multiline(&mut app.pasted_text)
                .hint_text("Paste text here...")
                .desired_rows(app.config.ui.paste_rows)
                .desired_width(f32::INFINITY),
        );
    }
}
