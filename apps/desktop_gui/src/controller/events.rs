//! Keypad events produced by widgets and keyboard input.

use eframe::egui;
use shared::protocol::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Keypad(Action),
    CopyCurrentOperand,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Keypad(action) => action.name(),
            UiEvent::CopyCurrentOperand => "copy_current_operand",
        }
    }
}

/// Maps typed characters onto keypad actions. Letters other than the
/// multiply (`x`) and clear (`c`) keys are ignored.
pub fn events_for_text(text: &str) -> Vec<UiEvent> {
    text.chars()
        .filter_map(Action::from_key)
        .map(UiEvent::Keypad)
        .collect()
}

pub fn event_for_key(key: egui::Key, modifiers: egui::Modifiers) -> Option<UiEvent> {
    if modifiers.command || modifiers.alt {
        return None;
    }
    match key {
        egui::Key::Enter => Some(UiEvent::Keypad(Action::Evaluate)),
        egui::Key::Backspace => Some(UiEvent::Keypad(Action::DeleteDigit)),
        egui::Key::Escape | egui::Key::Delete => Some(UiEvent::Keypad(Action::Clear)),
        _ => None,
    }
}

/// Collects keypad events from one frame of raw input.
pub fn events_from_input(events: &[egui::Event]) -> Vec<UiEvent> {
    let mut out = Vec::new();
    for event in events {
        match event {
            egui::Event::Text(text) => out.extend(events_for_text(text)),
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => out.extend(event_for_key(*key, *modifiers)),
            egui::Event::Copy => out.push(UiEvent::CopyCurrentOperand),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use shared::domain::{Digit, Operation};

    use super::*;

    #[test]
    fn typed_text_becomes_keypad_actions() {
        assert_eq!(
            events_for_text("7*"),
            vec![
                UiEvent::Keypad(Action::AddDigit(Digit::try_from('7').expect("digit"))),
                UiEvent::Keypad(Action::ChooseOperation(Operation::Multiply)),
            ]
        );
        assert_eq!(events_for_text("="), vec![UiEvent::Keypad(Action::Evaluate)]);
        assert!(events_for_text("q").is_empty());
    }

    #[test]
    fn editing_keys_map_to_actions() {
        let none = egui::Modifiers::NONE;
        assert_eq!(
            event_for_key(egui::Key::Enter, none),
            Some(UiEvent::Keypad(Action::Evaluate))
        );
        assert_eq!(
            event_for_key(egui::Key::Backspace, none),
            Some(UiEvent::Keypad(Action::DeleteDigit))
        );
        assert_eq!(
            event_for_key(egui::Key::Escape, none),
            Some(UiEvent::Keypad(Action::Clear))
        );
        assert_eq!(event_for_key(egui::Key::A, none), None);
    }

    #[test]
    fn modified_keys_are_left_to_the_shell() {
        assert_eq!(event_for_key(egui::Key::Enter, egui::Modifiers::COMMAND), None);
    }

    #[test]
    fn copy_and_text_events_are_collected_in_order() {
        let events = [
            egui::Event::Text("1".to_string()),
            egui::Event::Copy,
            egui::Event::Text("+".to_string()),
        ];
        assert_eq!(
            events_from_input(&events),
            vec![
                UiEvent::Keypad(Action::AddDigit(Digit::try_from('1').expect("digit"))),
                UiEvent::CopyCurrentOperand,
                UiEvent::Keypad(Action::ChooseOperation(Operation::Add)),
            ]
        );
    }
}
