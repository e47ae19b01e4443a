//! Keypad calculator state machine.
//!
//! [`transition`] folds one [`Action`] into a [`CalculatorState`], [`evaluate`]
//! performs the pending arithmetic and [`format_display`] renders an operand
//! for the screen. None of these fail: keystrokes that make no sense in the
//! current state are ignored and hand the state back unchanged.

mod evaluate;
mod format;
mod machine;

pub use evaluate::{canonical_number, evaluate};
pub use format::{format_display, format_display_with, format_pending, DisplayFormat};
pub use machine::{replay, transition};

pub use shared::{
    domain::{CalculatorState, Digit, Operation},
    protocol::Action,
};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
