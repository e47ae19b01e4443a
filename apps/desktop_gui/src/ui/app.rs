use arboard::Clipboard;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::config::Settings;
use crate::controller::events::{events_from_input, UiEvent};
use crate::controller::orchestration::dispatch_ui_event;
use crate::controller::reducer::KeypadController;
use crate::ui::keypad::{show_display, show_keypad};
use crate::ui::theme::{
    scaled_text_styles, visuals_for_theme, PersistedKeypadSettings, ThemePreset, ThemeSettings,
    MAX_TEXT_SCALE, MIN_TEXT_SCALE,
};

pub const SETTINGS_STORAGE_KEY: &str = "keypad.settings";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub settings: Settings,
    /// Theme forced on the command line; wins over the persisted choice.
    pub theme_override: Option<ThemePreset>,
}

pub struct KeypadApp {
    event_tx: Sender<UiEvent>,
    event_rx: Receiver<UiEvent>,
    controller: KeypadController,
    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
    status: String,
    settings_open: bool,
}

impl KeypadApp {
    pub fn new(
        event_tx: Sender<UiEvent>,
        event_rx: Receiver<UiEvent>,
        persisted_settings: Option<PersistedKeypadSettings>,
        startup: StartupConfig,
    ) -> Self {
        let mut theme = persisted_settings
            .map(PersistedKeypadSettings::into_runtime)
            .unwrap_or(startup.settings.theme);
        if let Some(preset) = startup.theme_override {
            theme.preset = preset;
        }

        Self {
            event_tx,
            event_rx,
            controller: KeypadController::new(startup.settings.display),
            theme,
            applied_theme: None,
            status: String::new(),
            settings_open: false,
        }
    }

    fn queue(&mut self, event: UiEvent) {
        dispatch_ui_event(&self.event_tx, event, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                UiEvent::Keypad(action) => {
                    self.controller.apply(action);
                    self.status.clear();
                }
                UiEvent::CopyCurrentOperand => self.copy_current_operand(),
            }
        }
    }

    fn copy_current_operand(&mut self) {
        let Some(text) = self.controller.clipboard_text().map(str::to_owned) else {
            self.status = "Nothing to copy".to_string();
            return;
        };

        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
            Ok(()) => {
                tracing::info!(value = %text, "copied operand to clipboard");
                self.status = format!("Copied {text}");
            }
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                self.status = format!("Clipboard unavailable: {err}");
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = scaled_text_styles(self.theme.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
    }

    fn collect_keyboard_input(&mut self, ctx: &egui::Context) {
        if self.settings_open {
            return;
        }
        let events = ctx.input(|input| events_from_input(&input.events));
        for event in events {
            self.queue(event);
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut settings_open = self.settings_open;
        egui::Window::new("Settings")
            .open(&mut settings_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Theme preset");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.theme.preset.label())
                    .show_ui(ui, |ui| {
                        for preset in ThemePreset::ALL {
                            ui.selectable_value(&mut self.theme.preset, preset, preset.label());
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("Accent color");
                    ui.color_edit_button_srgba(&mut self.theme.accent_color);
                });
                ui.add(egui::Slider::new(&mut self.theme.key_rounding, 0..=24).text("Key rounding"));
                ui.add(
                    egui::Slider::new(&mut self.theme.text_scale, MIN_TEXT_SCALE..=MAX_TEXT_SCALE)
                        .text("Text scale")
                        .step_by(0.05),
                );

                if ui.button("Reset to defaults").clicked() {
                    self.theme = ThemeSettings::default();
                }
            });
        self.settings_open = settings_open;
    }

    fn show_keypad_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.small(&self.status);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Settings").clicked() {
                            self.settings_open = !self.settings_open;
                        }
                    });
                });
            });

        let mut pressed = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            show_display(
                ui,
                &self.controller.display(),
                egui::CornerRadius::same(self.theme.key_rounding),
            );
            ui.add_space(8.0);
            pressed = show_keypad(ui, self.theme.accent_color);
        });

        for action in pressed {
            self.queue(UiEvent::Keypad(action));
        }
    }
}

impl eframe::App for KeypadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);
        self.collect_keyboard_input(ctx);
        self.process_ui_events();

        self.show_keypad_panel(ctx);
        self.show_settings_window(ctx);

        // Button clicks are only known after layout.
        if !self.event_rx.is_empty() {
            self.process_ui_events();
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedKeypadSettings::from_runtime(self.theme);
        match serde_json::to_string(&settings) {
            Ok(serialized) => storage.set_string(SETTINGS_STORAGE_KEY, serialized),
            Err(err) => tracing::error!("failed to serialize keypad settings: {err}"),
        }
    }
}
