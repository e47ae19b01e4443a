use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use calc_core::DisplayFormat;
use serde::Deserialize;

use crate::ui::theme::{
    parse_hex_color, ThemePreset, ThemeSettings, MAX_TEXT_SCALE, MIN_TEXT_SCALE,
};

pub const CONFIG_FILE_NAME: &str = "keypad.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub theme: ThemeSettings,
    pub display: DisplayFormat,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            display: DisplayFormat::default(),
            window_width: 340.0,
            window_height: 520.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    theme: Option<String>,
    accent_color: Option<String>,
    text_scale: Option<f32>,
    group_separator: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

/// Loads settings from defaults, then the config file, then the environment.
///
/// An explicit `path` must exist. Without one, `./keypad.toml` and then the
/// per-user config directory are tried, and a missing file is not an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };
    if let Some(file) = file {
        let raw = fs::read_to_string(&file)
            .with_context(|| format!("failed to read config file '{}'", file.display()))?;
        apply_file_settings(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", file.display()))?;
        tracing::info!(path = %file.display(), "loaded keypad config");
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("keypad_calc").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

fn apply_file_settings(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file.theme {
        set_theme(settings, &v);
    }
    if let Some(v) = file.accent_color {
        set_accent_color(settings, &v);
    }
    if let Some(v) = file.text_scale {
        settings.theme.text_scale = v.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
    }
    if let Some(v) = file.group_separator {
        set_group_separator(settings, &v);
    }
    if let Some(v) = file.window_width {
        settings.window_width = v.max(240.0);
    }
    if let Some(v) = file.window_height {
        settings.window_height = v.max(360.0);
    }

    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |suffix: &str| {
        lookup(&format!("APP__{suffix}")).or_else(|| lookup(&format!("KEYPAD_{suffix}")))
    };

    if let Some(v) = read("THEME") {
        set_theme(settings, &v);
    }
    if let Some(v) = read("ACCENT_COLOR") {
        set_accent_color(settings, &v);
    }
    if let Some(v) = read("TEXT_SCALE") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.theme.text_scale = parsed.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
        }
    }
    if let Some(v) = read("GROUP_SEPARATOR") {
        set_group_separator(settings, &v);
    }
}

fn set_theme(settings: &mut Settings, raw: &str) {
    match raw.parse::<ThemePreset>() {
        Ok(preset) => settings.theme.preset = preset,
        Err(err) => tracing::warn!("ignoring theme setting: {err}"),
    }
}

fn set_accent_color(settings: &mut Settings, raw: &str) {
    match parse_hex_color(raw) {
        Some([r, g, b]) => settings.theme.accent_color = eframe::egui::Color32::from_rgb(r, g, b),
        None => tracing::warn!(value = raw, "ignoring accent color; expected #rrggbb"),
    }
}

fn set_group_separator(settings: &mut Settings, raw: &str) {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) if !separator.is_ascii_digit() && separator != '.' => {
            settings.display.group_separator = separator;
        }
        _ => tracing::warn!(value = raw, "ignoring group separator; expected one character"),
    }
}
