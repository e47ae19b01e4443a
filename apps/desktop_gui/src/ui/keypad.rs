//! Keypad grid and display panel.

use eframe::egui;
use shared::protocol::Action;

use crate::controller::reducer::DisplayLines;

pub const COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    Operation,
    Command,
}

#[derive(Debug, Clone, Copy)]
pub struct KeypadKey {
    pub id: &'static str,
    pub label: &'static str,
    /// Key-script character the button stands for.
    pub key: char,
    pub span: usize,
    pub kind: KeyKind,
}

impl KeypadKey {
    const fn new(id: &'static str, label: &'static str, key: char, kind: KeyKind) -> Self {
        Self {
            id,
            label,
            key,
            span: 1,
            kind,
        }
    }

    const fn wide(self) -> Self {
        Self { span: 2, ..self }
    }

    pub fn action(&self) -> Option<Action> {
        Action::from_key(self.key)
    }
}

const fn digit(id: &'static str, label: &'static str) -> KeypadKey {
    let bytes = label.as_bytes();
    KeypadKey::new(id, label, bytes[0] as char, KeyKind::Digit)
}

pub const KEYPAD_ROWS: [&[KeypadKey]; 5] = [
    &[
        KeypadKey::new("clear", "AC", 'c', KeyKind::Command).wide(),
        KeypadKey::new("delete", "DEL", '<', KeyKind::Command),
        KeypadKey::new("divide", "÷", '/', KeyKind::Operation),
    ],
    &[
        digit("one", "1"),
        digit("two", "2"),
        digit("three", "3"),
        KeypadKey::new("multiply", "×", '*', KeyKind::Operation),
    ],
    &[
        digit("four", "4"),
        digit("five", "5"),
        digit("six", "6"),
        KeypadKey::new("add", "+", '+', KeyKind::Operation),
    ],
    &[
        digit("seven", "7"),
        digit("eight", "8"),
        digit("nine", "9"),
        KeypadKey::new("subtract", "-", '-', KeyKind::Operation),
    ],
    &[
        digit("decimal", "."),
        digit("zero", "0"),
        KeypadKey::new("equals", "=", '=', KeyKind::Command).wide(),
    ],
];

/// Draws the two-line display, right aligned like a pocket calculator.
pub fn show_display(ui: &mut egui::Ui, lines: &DisplayLines, corner_radius: egui::CornerRadius) {
    let text_scale = ui
        .style()
        .text_styles
        .get(&egui::TextStyle::Body)
        .map(|font| font.size / 14.0)
        .unwrap_or(1.0);

    egui::Frame::NONE
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(corner_radius)
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(
                    egui::RichText::new(non_empty(&lines.previous))
                        .size(18.0 * text_scale)
                        .weak(),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(non_empty(&lines.current))
                            .size(38.0 * text_scale)
                            .strong()
                            .monospace(),
                    )
                    .truncate(),
                );
            });
        });
}

fn non_empty(text: &str) -> &str {
    if text.is_empty() {
        " "
    } else {
        text
    }
}

/// Draws the button grid and returns the actions of the buttons clicked this frame.
pub fn show_keypad(ui: &mut egui::Ui, accent: egui::Color32) -> Vec<Action> {
    let spacing = ui.spacing().item_spacing.x;
    let columns = COLUMNS as f32;
    let cell_width = ((ui.available_width() - spacing * (columns - 1.0)) / columns).max(48.0);
    let rows = KEYPAD_ROWS.len() as f32;
    let cell_height = ((ui.available_height() - ui.spacing().item_spacing.y * (rows - 1.0))
        / rows)
        .clamp(40.0, cell_width);

    let mut pressed = Vec::new();
    for row in KEYPAD_ROWS {
        ui.horizontal(|ui| {
            for key in row {
                let span = key.span as f32;
                let width = cell_width * span + spacing * (span - 1.0);
                let text = egui::RichText::new(key.label).size(cell_height * 0.4);
                let button = match key.kind {
                    KeyKind::Operation => {
                        egui::Button::new(text.color(egui::Color32::WHITE)).fill(accent)
                    }
                    KeyKind::Command => egui::Button::new(text.strong()),
                    KeyKind::Digit => egui::Button::new(text),
                };

                if ui.add_sized([width, cell_height], button).clicked() {
                    tracing::debug!(button = key.id, "keypad button clicked");
                    if let Some(action) = key.action() {
                        pressed.push(action);
                    }
                }
            }
        });
    }
    pressed
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_button_maps_to_an_action() {
        for key in KEYPAD_ROWS.iter().flat_map(|row| row.iter()) {
            assert!(key.action().is_some(), "button {} has no action", key.id);
        }
    }

    #[test]
    fn every_row_fills_the_grid() {
        for row in KEYPAD_ROWS {
            let width: usize = row.iter().map(|key| key.span).sum();
            assert_eq!(width, COLUMNS);
        }
    }

    #[test]
    fn button_ids_are_unique() {
        let ids: HashSet<_> = KEYPAD_ROWS
            .iter()
            .flat_map(|row| row.iter().map(|key| key.id))
            .collect();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn digit_buttons_use_their_label_as_key() {
        let zero = KEYPAD_ROWS[4][1];
        assert_eq!(zero.key, '0');
        assert_eq!(zero.kind, KeyKind::Digit);
    }
}
