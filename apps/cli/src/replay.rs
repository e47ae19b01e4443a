use std::{fs, path::Path};

use anyhow::Context;
use calc_core::{format_display_with, format_pending, transition, CalculatorState, DisplayFormat};
use serde::Serialize;
use shared::protocol::{parse_keys, parse_keys_lenient, Action};

/// One rendered frame of the keypad display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub action: Option<&'static str>,
    pub previous: String,
    pub current: String,
}

impl Frame {
    fn render(state: &CalculatorState, format: &DisplayFormat, action: Option<&Action>) -> Self {
        Self {
            action: action.map(Action::name),
            previous: format_pending(state, format),
            current: format_display_with(&state.current_operand, format),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replay {
    pub state: CalculatorState,
    pub frames: Vec<Frame>,
}

impl Replay {
    pub fn final_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

/// Turns a key script into actions; unknown keys fail in strict mode and are
/// skipped with a warning otherwise.
pub fn actions_from_keys(script: &str, strict: bool) -> anyhow::Result<Vec<Action>> {
    if strict {
        return parse_keys(script).context("invalid key script");
    }

    let (actions, rejected) = parse_keys_lenient(script);
    for err in rejected {
        tracing::warn!("skipping key: {err}");
    }
    Ok(actions)
}

/// Reads a JSON array of actions, e.g. `[{"type":"add_digit","payload":"5"}]`.
pub fn actions_from_file(path: &Path) -> anyhow::Result<Vec<Action>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read action file '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse action file '{}'", path.display()))
}

/// Folds actions into a fresh calculator, recording the display after each one.
pub fn replay(actions: &[Action], format: &DisplayFormat) -> Replay {
    let mut state = CalculatorState::default();
    let mut frames = vec![Frame::render(&state, format, None)];

    for action in actions {
        state = transition(state, *action);
        frames.push(Frame::render(&state, format, Some(action)));
    }

    Replay { state, frames }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_chained_key_script() {
        let actions = actions_from_keys("5 + 3 * 2 =", true).expect("keys");
        let replay = replay(&actions, &DisplayFormat::default());

        assert_eq!(replay.state.current_operand, "16");
        assert_eq!(replay.frames.len(), actions.len() + 1);
        let last = replay.final_frame().expect("frame");
        assert_eq!(last.action, Some("evaluate"));
        assert_eq!(last.current, "16");
        assert_eq!(last.previous, "");
    }

    #[test]
    fn frames_show_pending_operation() {
        let actions = actions_from_keys("1234*", true).expect("keys");
        let replay = replay(&actions, &DisplayFormat::default());
        let last = replay.final_frame().expect("frame");

        assert_eq!(last.previous, "1,234 ×");
        assert_eq!(last.current, "");
    }

    #[test]
    fn strict_mode_rejects_unknown_keys() {
        let err = actions_from_keys("1+?", true).expect_err("strict");
        assert!(format!("{err:#}").contains("unrecognized key '?'"));
    }

    #[test]
    fn lenient_mode_skips_unknown_keys() {
        let actions = actions_from_keys("1+?2=", false).expect("lenient");
        let replay = replay(&actions, &DisplayFormat::default());
        assert_eq!(replay.state.current_operand, "3");
    }

    #[test]
    fn reads_actions_from_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r#"[
                {"type":"add_digit","payload":"9"},
                {"type":"choose_operation","payload":"/"},
                {"type":"add_digit","payload":"0"},
                {"type":"evaluate"}
            ]"#,
        )
        .expect("write");

        let actions = actions_from_file(&path).expect("actions");
        let replay = replay(&actions, &DisplayFormat::default());
        assert_eq!(replay.state.current_operand, "Infinity");
    }

    #[test]
    fn malformed_action_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"[{"type":"add_digit","payload":"z"}]"#).expect("write");

        let err = actions_from_file(&path).expect_err("invalid digit");
        assert!(err.to_string().contains("failed to parse action file"));
    }
}
