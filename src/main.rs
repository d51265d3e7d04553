//! WriteAble - document analyzer interface
//!
//! A Rust-based preview of the WriteAble analyzer UI with document upload,
//! pasted-text input, and per-category results.

mod app;
mod core;
mod ui;

use app::{WriteableApp, PAGE_TITLE};
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting WriteAble...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title(PAGE_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "WriteAble",
        native_options,
        Box::new(|cc| Ok(Box::new(WriteableApp::new(cc)))),
    )
}
