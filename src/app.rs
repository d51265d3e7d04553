//! Main application state and UI coordination

use std::path::PathBuf;

use eframe::egui;

use crate::core::analysis::AnalysisResult;
use crate::core::config::AppConfig;
use crate::core::upload::{self, UploadError, UploadedDocument};
use crate::ui::{
    header::HeaderPanel, inputs::InputPanel, preview::DocumentPreview, results::ResultsPanel,
};

/// Window and page title
pub const PAGE_TITLE: &str = "WriteAble Document Analyzer";

/// Main application state
pub struct WriteableApp {
    /// Text pasted into the right input column
    pub pasted_text: String,
    /// Upload captured from the left input column
    pub upload: Option<UploadedDocument>,
    /// Results of the last analysis run
    pub results: Option<AnalysisResult>,
    /// Upload failure surfaced to the user
    pub notice: Option<UploadError>,
    /// Application configuration
    pub config: AppConfig,
    /// Commonmark cache for the document preview
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl WriteableApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Image loaders for the header logo
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_default();
        Self::apply_theme(&cc.egui_ctx, &config);

        Self {
            pasted_text: String::new(),
            upload: None,
            results: None,
            notice: None,
            config,
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
        }
    }

    /// Apply the configured theme
    fn apply_theme(ctx: &egui::Context, config: &AppConfig) {
        if config.ui.theme == "light" {
            ctx.set_visuals(egui::Visuals::light());
        } else {
            ctx.set_visuals(egui::Visuals::dark());
        }
    }

    /// Run analysis, replacing any previous results.
    ///
    /// Placeholder behavior: the captured input is not consulted until the
    /// analysis pipeline is wired in.
    pub fn run_analysis(&mut self) {
        self.results = Some(AnalysisResult::placeholder());
        tracing::info!("Analysis triggered");
    }

    /// Capture a document picked in the upload dialog
    pub fn capture_upload(&mut self, path: PathBuf) {
        self.config.remember_upload_dir(&path);
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }

        match upload::load(&path) {
            Ok(doc) => {
                self.notice = None;
                self.upload = Some(doc);
            }
            Err(e) => {
                tracing::error!("Failed to capture upload: {}", e);
                self.notice = Some(e);
            }
        }
    }

    /// Drop the captured upload and any pending notice
    pub fn clear_upload(&mut self) {
        self.upload = None;
        self.notice = None;
    }
}

impl eframe::App for WriteableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Enter)) {
            self.run_analysis();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    HeaderPanel::show(ui);

                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Upload a document or paste text below to analyze it.")
                            .size(18.0),
                    );
                    ui.add_space(20.0);

                    InputPanel::show(ui, self);

                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);

                    let analyze = ui.add_sized(
                        [ui.available_width(), 36.0],
                        egui::Button::new(egui::RichText::new("Analyze").size(16.0)),
                    );
                    if analyze.clicked() {
                        self.run_analysis();
                    }

                    if let Some(ref notice) = self.notice {
                        ui.add_space(6.0);
                        ui.colored_label(ui.visuals().error_fg_color, notice.to_string());
                    }

                    if self.upload.is_some() {
                        ui.add_space(12.0);
                        DocumentPreview::show(ui, self);
                    }

                    if self.results.is_some() {
                        ui.add_space(12.0);
                        ResultsPanel::show(ui, self);
                    }
                });
        });
    }
}
