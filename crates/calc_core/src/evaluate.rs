use shared::domain::CalculatorState;

/// Applies the pending operation to the two operands.
///
/// Returns an empty string when either operand is not a number (empty, a
/// lone `.`) or no operation is pending. Division by zero follows IEEE-754.
pub fn evaluate(state: &CalculatorState) -> String {
    let Some(operation) = state.operation else {
        return String::new();
    };
    let (Some(lhs), Some(rhs)) = (
        parse_operand(&state.previous_operand),
        parse_operand(&state.current_operand),
    ) else {
        return String::new();
    };

    canonical_number(operation.apply(lhs, rhs))
}

fn parse_operand(operand: &str) -> Option<f64> {
    operand
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Shortest decimal text that parses back to `value`.
///
/// Integral values carry no fractional part, negative zero collapses to `0`
/// and the special values are spelled `Infinity`, `-Infinity` and `NaN`.
pub fn canonical_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
