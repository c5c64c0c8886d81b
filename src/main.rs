#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cryptoworld")
}

/// Crypto World - cryptocurrency landing page
#[derive(Parser, Debug)]
#[command(name = "cryptoworld-desktop")]
#[command(about = "Crypto World - markets, learning and news in one page")]
struct Args {
    /// Data directory for the theme preference
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting Crypto World with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(cryptoworld_core::content::BRAND_NAME)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
