//! Theme presets and their persisted form.

use std::{collections::BTreeMap, str::FromStr};

use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    Dark,
    AtomOneDark,
    Light,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [
        ThemePreset::Dark,
        ThemePreset::AtomOneDark,
        ThemePreset::Light,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Dark => "Dark",
            ThemePreset::AtomOneDark => "Atom One Dark",
            ThemePreset::Light => "Light",
        }
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "dark" => Ok(ThemePreset::Dark),
            "atom_one_dark" | "atom" => Ok(ThemePreset::AtomOneDark),
            "light" => Ok(ThemePreset::Light),
            other => Err(format!(
                "unknown theme '{other}' (expected dark, atom_one_dark or light)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub accent_color: egui::Color32,
    pub key_rounding: u8,
    pub text_scale: f32,
}

pub const MIN_TEXT_SCALE: f32 = 0.8;
pub const MAX_TEXT_SCALE: f32 = 1.6;

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Dark,
            accent_color: egui::Color32::from_rgb(255, 145, 0),
            key_rounding: 8,
            text_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedKeypadSettings {
    pub theme_preset: ThemePreset,
    pub accent_color: [u8; 4],
    pub key_rounding: u8,
    pub text_scale: f32,
}

impl Default for PersistedKeypadSettings {
    fn default() -> Self {
        Self::from_runtime(ThemeSettings::default())
    }
}

impl PersistedKeypadSettings {
    pub fn into_runtime(self) -> ThemeSettings {
        ThemeSettings {
            preset: self.theme_preset,
            accent_color: egui::Color32::from_rgba_unmultiplied(
                self.accent_color[0],
                self.accent_color[1],
                self.accent_color[2],
                self.accent_color[3],
            ),
            key_rounding: self.key_rounding.min(24),
            text_scale: self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }

    pub fn from_runtime(theme: ThemeSettings) -> Self {
        Self {
            theme_preset: theme.preset,
            accent_color: theme.accent_color.to_array(),
            key_rounding: theme.key_rounding,
            text_scale: theme.text_scale,
        }
    }
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = match theme.preset {
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.window_fill = egui::Color32::from_rgb(28, 28, 30);
            v.panel_fill = egui::Color32::from_rgb(28, 28, 30);
            v.extreme_bg_color = egui::Color32::from_rgb(12, 12, 14);
            v.faint_bg_color = egui::Color32::from_rgb(44, 44, 48);
            v.widgets.inactive.weak_bg_fill = egui::Color32::from_rgb(58, 58, 62);
            v
        }
        ThemePreset::AtomOneDark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(171, 178, 191));
            v.window_fill = egui::Color32::from_rgb(40, 44, 52);
            v.panel_fill = egui::Color32::from_rgb(33, 37, 43);
            v.extreme_bg_color = egui::Color32::from_rgb(24, 26, 31);
            v.faint_bg_color = egui::Color32::from_rgb(52, 57, 66);
            v.widgets.inactive.weak_bg_fill = egui::Color32::from_rgb(52, 57, 66);
            v
        }
        ThemePreset::Light => egui::Visuals::light(),
    };

    visuals.selection.bg_fill = theme.accent_color;
    visuals.widgets.hovered.weak_bg_fill = theme.accent_color.gamma_multiply(0.6);
    visuals.widgets.active.weak_bg_fill = theme.accent_color;

    let radius = egui::CornerRadius::same(theme.key_rounding);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;
    visuals.window_corner_radius = egui::CornerRadius::same(theme.key_rounding.saturating_add(2));

    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(raw: &str) -> Option<[u8; 3]> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
