use std::{path::PathBuf, sync::Arc};

mod assets;
mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use crossbeam_channel::bounded;
use dex_client::{
    config::{load_settings, validate_base_url, LoadedSettings},
    DexClient,
};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{
    app::{WINDOW_SIZE, WINDOW_TITLE},
    PokedexApp,
};

#[derive(Parser, Debug)]
#[command(about = "Pokédex desktop lookup window")]
struct Args {
    /// Overrides the configured PokéAPI pokemon endpoint.
    #[arg(long)]
    base_url: Option<String>,
    /// Directory holding pokemon_bg.png and pokedex_icon.png.
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let LoadedSettings {
        mut settings,
        file_error,
    } = load_settings();
    if let Some(base_url) = args.base_url {
        settings.api_base_url = base_url;
    }
    if let Some(assets_dir) = args.assets_dir {
        settings.assets_dir = assets_dir;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();
    if let Some(err) = file_error {
        tracing::warn!("{err:#}");
    }

    let base_url = validate_base_url(&settings.api_base_url)?;
    let assets = assets::load_startup_assets(&settings.assets_dir)?;
    tracing::info!(%base_url, assets_dir = %settings.assets_dir.display(), "starting pokedex");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, Arc::new(DexClient::new(base_url)));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([WINDOW_SIZE, WINDOW_SIZE])
            .with_resizable(false)
            .with_icon(assets.icon),
        ..Default::default()
    };
    let background = assets.background;
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(PokedexApp::new(cc, cmd_tx, ui_rx, background)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
