use super::*;

fn digit(c: char) -> Action {
    Action::AddDigit(Digit::try_from(c).expect("keypad digit"))
}

fn op(c: char) -> Action {
    Action::ChooseOperation(Operation::try_from(c).expect("keypad operation"))
}

fn type_keys(keys: &str) -> Vec<Action> {
    keys.chars()
        .map(|c| match c {
            '=' => Action::Evaluate,
            '<' => Action::DeleteDigit,
            'c' => Action::Clear,
            '0'..='9' | '.' => digit(c),
            other => op(other),
        })
        .collect()
}

fn run(keys: &str) -> CalculatorState {
    replay(CalculatorState::default(), type_keys(keys))
}

#[test]
fn typed_digits_accumulate_verbatim() {
    assert_eq!(run("1203.45").current_operand, "1203.45");
    assert_eq!(run("0.5").current_operand, "0.5");
}

#[test]
fn repeated_leading_zero_is_ignored() {
    let state = run("0");
    let next = transition(state.clone(), digit('0'));
    assert_eq!(next, state);
    assert_eq!(next.current_operand, "0");
}

#[test]
fn zero_after_other_digits_still_appends() {
    assert_eq!(run("100").current_operand, "100");
    assert_eq!(run("0.00").current_operand, "0.00");
}

#[test]
fn second_decimal_point_is_ignored() {
    assert_eq!(run("..").current_operand, ".");
    assert_eq!(run("1.2.3").current_operand, "1.23");
}

#[test]
fn delete_empties_operand_then_becomes_noop() {
    let mut state = run("123");
    for _ in 0..3 {
        state = transition(state, Action::DeleteDigit);
    }
    assert_eq!(state.current_operand, "");

    let after = transition(state.clone(), Action::DeleteDigit);
    assert_eq!(after, state);
}

#[test]
fn simple_addition_round_trip() {
    let state = run("5+3=");
    assert_eq!(state.current_operand, "8");
    assert_eq!(state.previous_operand, "");
    assert_eq!(state.operation, None);
    assert!(state.overwrite);
}

#[test]
fn chained_operations_evaluate_left_to_right() {
    let state = run("5+3*");
    assert_eq!(state.previous_operand, "8");
    assert_eq!(state.current_operand, "");
    assert_eq!(state.operation, Some(Operation::Multiply));

    assert_eq!(run("5+3*2=").current_operand, "16");
}

#[test]
fn digit_after_evaluation_replaces_result() {
    let state = run("5+3=7");
    assert_eq!(state.current_operand, "7");
    assert!(!state.overwrite);
}

#[test]
fn delete_after_evaluation_clears_result() {
    let state = run("5+3=<");
    assert_eq!(state.current_operand, "");
    assert!(!state.overwrite);
}

#[test]
fn result_can_seed_next_operation() {
    let state = run("5+3=-2=");
    assert_eq!(state.current_operand, "6");
}

#[test]
fn operation_without_operands_is_ignored() {
    let state = transition(CalculatorState::default(), op('+'));
    assert!(state.is_initial());
}

#[test]
fn operation_can_be_switched_before_second_operand() {
    let state = run("5+-");
    assert_eq!(state.previous_operand, "5");
    assert_eq!(state.current_operand, "");
    assert_eq!(state.operation, Some(Operation::Subtract));
}

#[test]
fn evaluate_without_previous_operand_is_noop() {
    let state = run("42");
    assert_eq!(transition(state.clone(), Action::Evaluate), state);
}

#[test]
fn evaluate_without_current_operand_is_noop() {
    let state = run("42+");
    assert_eq!(transition(state.clone(), Action::Evaluate), state);
}

#[test]
fn evaluate_without_operation_is_noop() {
    let state = CalculatorState {
        current_operand: "3".into(),
        previous_operand: "4".into(),
        operation: None,
        overwrite: false,
    };
    assert_eq!(transition(state.clone(), Action::Evaluate), state);
}

#[test]
fn clear_returns_initial_state() {
    for keys in ["", "12", "12+", "12+3", "12+3=", "5+3=<", "..+"] {
        let state = transition(run(keys), Action::Clear);
        assert!(state.is_initial(), "clear after {keys:?} left {state:?}");
    }
}

#[test]
fn division_by_zero_shows_infinity() {
    let state = run("1/0=");
    assert_eq!(state.current_operand, "Infinity");
    assert_eq!(format_display(&state.current_operand), "Infinity");
}

#[test]
fn chaining_non_numeric_operands_propagates_empty_previous() {
    // A lone "." cannot be parsed, so the chained evaluation yields nothing.
    let state = run(".+3*");
    assert_eq!(state.previous_operand, "");
    assert_eq!(state.operation, Some(Operation::Multiply));

    let state = transition(state, digit('2'));
    assert_eq!(transition(state.clone(), Action::Evaluate), state);
}

#[test]
fn display_text_is_grouped() {
    let state = run("1234567.5*2=");
    assert_eq!(state.current_operand, "2469135");
    assert_eq!(format_display(&state.current_operand), "2,469,135");
}
