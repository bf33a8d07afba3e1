#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Session file given on the command line
static SESSION_FILE: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("newdle")
    })
}

/// Get the session file passed with `--session`, if any
pub fn get_session_file() -> Option<PathBuf> {
    SESSION_FILE.get().cloned().flatten()
}

/// Newdle - scheduling polls on the desktop
#[derive(Parser, Debug)]
#[command(name = "newdle-desktop")]
#[command(about = "Newdle - view and share scheduling polls")]
struct Args {
    /// Data directory for local storage
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: newdle-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Session file with the user, polls and participant codes to show
    #[arg(short, long)]
    session: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = if let Some(dir) = args.data_dir {
        dir
    } else {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        match args.name {
            Some(ref name) => base.join(format!("newdle-{}", name)),
            None => base.join("newdle"),
        }
    };

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = SESSION_FILE.set(args.session.clone());

    let title = match args.name {
        Some(ref name) => format!("newdle - {}", name),
        None => "newdle".to_string(),
    };

    tracing::info!(
        data_dir = %data_dir.display(),
        session = ?args.session,
        "Starting newdle"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
