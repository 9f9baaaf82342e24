#![allow(non_snake_case)]

mod app;
mod audio;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lovenote_core::CardConfig;
use tracing_subscriber::EnvFilter;

use crate::context::LoadedCard;

/// Log filter used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "lovenote=info,lovenote_core=info";

/// Global card contents, set once before launch
static CARD: OnceLock<LoadedCard> = OnceLock::new();

/// Get the loaded card (letter text plus embedded assets)
pub fn get_card() -> LoadedCard {
    CARD.get().cloned().unwrap_or_else(|| LoadedCard::load(&CardConfig::default()))
}

/// Lovenote - an envelope that opens into a letter
#[derive(Parser, Debug)]
#[command(name = "lovenote-desktop")]
#[command(about = "An animated greeting card with music and falling snow")]
struct Args {
    /// Card file (JSON) with the letter text and asset paths
    #[arg(short, long)]
    card: Option<PathBuf>,

    /// Background music, overrides the card file
    #[arg(short, long)]
    audio: Option<PathBuf>,

    /// Photo shown inside the letter, overrides the card file
    #[arg(short, long)]
    photo: Option<PathBuf>,

    /// Window title (defaults to the card title)
    #[arg(short, long)]
    title: Option<String>,
}

/// Card file used when --card is not given, if it exists
fn default_card_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lovenote").join("card.json"))
}

/// Merge the card file (explicit or default) with CLI overrides
fn resolve_config(args: &Args, fallback: Option<&Path>) -> anyhow::Result<CardConfig> {
    let card_path = match (&args.card, fallback) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(path)) if path.exists() => Some(path.to_path_buf()),
        _ => None,
    };

    let mut config = match card_path {
        Some(path) => {
            tracing::info!("Loading card from {:?}", path);
            CardConfig::load(&path).with_context(|| format!("loading card {}", path.display()))?
        }
        None => CardConfig::default(),
    };

    if let Some(ref audio) = args.audio {
        config.audio = audio.clone();
    }
    if let Some(ref photo) = args.photo {
        config.photo = photo.clone();
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(&args, default_card_path().as_deref())?;

    // Window title: explicit, else the card heading
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| config.letter.title.clone());

    tracing::info!(
        "Starting '{}' with photo {:?} and audio {:?}",
        title,
        config.photo,
        config.audio
    );

    let _ = CARD.set(LoadedCard::load(&config));

    // Portrait window, roughly phone shaped
    let window_width = 480.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
