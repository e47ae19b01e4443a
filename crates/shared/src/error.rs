use thiserror::Error;

/// Rejections raised while turning raw text into keypad input.
///
/// The state machine itself never fails; these only surface where characters
/// are converted into [`crate::domain::Digit`]s and [`crate::domain::Operation`]s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a keypad digit")]
    InvalidDigit(char),
    #[error("'{0}' is not a keypad operation")]
    UnknownOperation(String),
    #[error("unrecognized key '{key}' at position {position}")]
    UnknownKey { key: char, position: usize },
}
