use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::controller::events::UiEvent;
use crate::ui::app::SETTINGS_STORAGE_KEY;
use crate::ui::theme::{PersistedKeypadSettings, ThemePreset};
use crate::ui::{KeypadApp, StartupConfig};

const APP_NAME: &str = "Keypad Calculator";
const UI_EVENT_QUEUE_CAPACITY: usize = 256;

#[derive(Parser, Debug)]
#[command(name = "keypad", about = "On-screen four-function calculator")]
struct Args {
    /// Path to a keypad.toml config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Theme preset (dark, atom_one_dark, light); overrides the saved choice.
    #[arg(long)]
    theme: Option<ThemePreset>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref())
        .context("failed to load keypad settings")?;

    let (event_tx, event_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
    let startup = StartupConfig {
        theme_override: args.theme,
        settings,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([startup.settings.window_width, startup.settings.window_height])
            .with_min_inner_size([240.0, 360.0]),
        ..Default::default()
    };

    tracing::info!("starting keypad window");
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedKeypadSettings>(&text).ok())
            });
            Ok(Box::new(KeypadApp::new(
                event_tx,
                event_rx,
                persisted_settings,
                startup,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("keypad window failed: {err}"))
}
