use serde::{Deserialize, Serialize};

use crate::{
    domain::{Digit, Operation},
    error::InputError,
};

/// Keypad messages dispatched into the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
}

impl Action {
    /// Maps one key-script character onto an action.
    ///
    /// `0-9 .` enter digits, `+ - * / x` pick an operation, `=` evaluates,
    /// `<` deletes and `c`/`C` clears.
    pub fn from_key(key: char) -> Option<Action> {
        match key {
            '=' => Some(Action::Evaluate),
            '<' => Some(Action::DeleteDigit),
            'c' | 'C' => Some(Action::Clear),
            other => Digit::try_from(other)
                .map(Action::AddDigit)
                .or_else(|_| Operation::try_from(other).map(Action::ChooseOperation))
                .ok(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::AddDigit(_) => "add_digit",
            Action::ChooseOperation(_) => "choose_operation",
            Action::Clear => "clear",
            Action::DeleteDigit => "delete_digit",
            Action::Evaluate => "evaluate",
        }
    }
}

/// Parses a key script, rejecting the first character that is not a keypad key.
/// Whitespace is skipped.
pub fn parse_keys(script: &str) -> Result<Vec<Action>, InputError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, key)| !key.is_whitespace())
        .map(|(position, key)| {
            Action::from_key(key).ok_or(InputError::UnknownKey { key, position })
        })
        .collect()
}

/// Parses a key script, collecting unknown keys instead of failing on them.
pub fn parse_keys_lenient(script: &str) -> (Vec<Action>, Vec<InputError>) {
    let mut actions = Vec::new();
    let mut rejected = Vec::new();
    for (position, key) in script.chars().enumerate() {
        if key.is_whitespace() {
            continue;
        }
        match Action::from_key(key) {
            Some(action) => actions.push(action),
            None => rejected.push(InputError::UnknownKey { key, position }),
        }
    }
    (actions, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Action {
        Action::AddDigit(Digit::try_from(c).expect("digit"))
    }

    #[test]
    fn parses_simple_key_script() {
        let actions = parse_keys("12 + 3=").expect("script");
        assert_eq!(
            actions,
            vec![
                digit('1'),
                digit('2'),
                Action::ChooseOperation(Operation::Add),
                digit('3'),
                Action::Evaluate,
            ]
        );
    }

    #[test]
    fn maps_editing_keys() {
        assert_eq!(Action::from_key('<'), Some(Action::DeleteDigit));
        assert_eq!(Action::from_key('C'), Some(Action::Clear));
        assert_eq!(
            Action::from_key('x'),
            Some(Action::ChooseOperation(Operation::Multiply))
        );
        assert_eq!(Action::from_key('?'), None);
    }

    #[test]
    fn strict_parse_reports_position_of_unknown_key() {
        let err = parse_keys("1+a").expect_err("unknown key");
        assert_eq!(
            err,
            InputError::UnknownKey {
                key: 'a',
                position: 2
            }
        );
    }

    #[test]
    fn lenient_parse_skips_unknown_keys() {
        let (actions, rejected) = parse_keys_lenient("7?=");
        assert_eq!(actions, vec![digit('7'), Action::Evaluate]);
        assert_eq!(rejected.len(), 1);
    }

    #[test]
    fn actions_serialize_with_type_and_payload_tags() {
        let json = serde_json::to_string(&digit('5')).expect("serialize");
        assert_eq!(json, r#"{"type":"add_digit","payload":"5"}"#);

        let json = serde_json::to_string(&Action::ChooseOperation(Operation::Divide))
            .expect("serialize");
        assert_eq!(json, r#"{"type":"choose_operation","payload":"/"}"#);

        let parsed: Vec<Action> =
            serde_json::from_str(r#"[{"type":"clear"},{"type":"evaluate"}]"#).expect("parse");
        assert_eq!(parsed, vec![Action::Clear, Action::Evaluate]);
    }

    #[test]
    fn rejects_invalid_digit_payload() {
        let parsed = serde_json::from_str::<Action>(r#"{"type":"add_digit","payload":"a"}"#);
        assert!(parsed.is_err());
    }
}
