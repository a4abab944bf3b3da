use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use overlay_editor::config;
use overlay_editor::editor::view::{Transform, screen_offset};
use overlay_editor::editor::{GalleryState, GalleryView, Store};
use overlay_editor::script::{parse_line, parse_script};

/// Replay editor actions against the seed gallery and print the result.
#[derive(Debug, Parser)]
#[command(name = "overlay-replay", version)]
struct Cli {
    /// Actions to apply in order, one per argument (e.g. "zoom-in" "move 0 50 80")
    actions: Vec<String>,

    /// Read actions from a script file, applied before the positional actions
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every dispatched action
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let mut actions = Vec::new();

    if let Some(path) = &cli.script {
        let script = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading script '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        match parse_script(&script) {
            Ok(parsed) => actions.extend(parsed),
            Err(e) => {
                eprintln!("Error in script '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    for (idx, arg) in cli.actions.iter().enumerate() {
        match parse_line(arg, idx + 1) {
            Ok(Some(action)) => actions.push(action),
            Ok(None) => {}
            Err(e) => {
                eprintln!("Error in action argument: {}", e);
                process::exit(1);
            }
        }
    }

    log::info!("replaying {} action(s)", actions.len());

    let mut store = Store::new(GalleryState::seed());
    let state = store.dispatch_all(actions);

    println!("{}", GalleryView::of(state));
    for (idx, image) in state.images.iter().enumerate() {
        let marker = if idx == state.selected_image { '*' } else { ' ' };
        println!(
            "{} [{}] {} | {} | history {}/{}",
            marker,
            idx,
            image.current.src,
            Transform::of(image),
            image.history.undo_count(),
            image.history.redo_count()
        );
        for input in &image.current.inputs {
            let (left, top) = screen_offset(input, config.layout.position_divisor).css();
            println!(
                "      #{} at ({}, {}) -> left {} top {}: {:?}",
                input.id, input.position.x, input.position.y, left, top, input.content
            );
        }
    }
}
