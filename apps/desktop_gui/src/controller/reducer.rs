//! Owner of the calculator state for the keypad window.

use calc_core::{
    format_display_with, format_pending, transition, CalculatorState, DisplayFormat,
};
use shared::protocol::Action;

/// Text shown in the two display rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayLines {
    /// Previous operand followed by the pending operation, e.g. `1,234 +`.
    pub previous: String,
    pub current: String,
}

#[derive(Debug, Default)]
pub struct KeypadController {
    state: CalculatorState,
    format: DisplayFormat,
}

impl KeypadController {
    pub fn new(format: DisplayFormat) -> Self {
        Self {
            state: CalculatorState::default(),
            format,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Runs one action through the state machine. Returns whether the state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        let before = std::mem::take(&mut self.state);
        let unchanged = before.clone();
        self.state = transition(before, action);

        let changed = self.state != unchanged;
        if changed {
            tracing::debug!(
                action = action.name(),
                current = %self.state.current_operand,
                previous = %self.state.previous_operand,
                "keypad state updated"
            );
        } else {
            tracing::trace!(action = action.name(), "keypad action ignored");
        }
        changed
    }

    pub fn display(&self) -> DisplayLines {
        DisplayLines {
            previous: format_pending(&self.state, &self.format),
            current: format_display_with(&self.state.current_operand, &self.format),
        }
    }

    /// Raw current operand for the clipboard, without grouping.
    pub fn clipboard_text(&self) -> Option<&str> {
        let current = self.state.current_operand.as_str();
        (!current.is_empty()).then_some(current)
    }
}
