use shared::domain::CalculatorState;

/// How operands are rendered on the keypad display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat {
    pub group_separator: char,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            group_separator: ',',
        }
    }
}

/// Renders an operand with `,` thousands grouping.
pub fn format_display(operand: &str) -> String {
    format_display_with(operand, &DisplayFormat::default())
}

/// Renders an operand for display.
///
/// The integer part is grouped in threes; the fractional part (including a
/// bare trailing `.`) is reattached verbatim. Text that is not a plain
/// decimal, such as `Infinity`, is returned as is.
pub fn format_display_with(operand: &str, format: &DisplayFormat) -> String {
    if operand.is_empty() {
        return String::new();
    }

    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return operand.to_string();
    }

    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut rendered = String::with_capacity(operand.len() + digits.len() / 3 + 1);
    rendered.push_str(sign);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            rendered.push(format.group_separator);
        }
        rendered.push(digit);
    }
    if let Some(fraction) = fraction {
        rendered.push('.');
        rendered.push_str(fraction);
    }
    rendered
}

/// Upper display row: the previous operand followed by the pending operation,
/// e.g. `1,234 ×`.
pub fn format_pending(state: &CalculatorState, format: &DisplayFormat) -> String {
    let previous = format_display_with(&state.previous_operand, format);
    match state.operation {
        Some(operation) if previous.is_empty() => operation.label().to_string(),
        Some(operation) => format!("{previous} {}", operation.label()),
        None => previous,
    }
}
