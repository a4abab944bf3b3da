mod app;
mod canvas;

use std::path::PathBuf;

use app::OverlayEditorApp;
use clap::Parser;
use overlay_editor::config;
use overlay_editor::editor::GalleryState;

/// Edit text overlays on a small gallery of images.
#[derive(Debug, Parser)]
#[command(name = "overlay-editor", version)]
struct Cli {
    /// Image files to edit instead of the built-in gallery
    #[arg(short, long = "image")]
    images: Vec<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let gallery = if cli.images.is_empty() {
        GalleryState::seed()
    } else {
        GalleryState::from_sources(cli.images)
    };
    log::info!("starting with {} image(s)", gallery.images.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Overlay Editor",
        options,
        Box::new(|cc| Ok(Box::new(OverlayEditorApp::new(cc, config, gallery)))),
    )
}
