use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Binary operations offered on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Glyph shown on the keypad button.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = InputError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operation::Add),
            '-' => Ok(Operation::Subtract),
            '*' | 'x' | 'X' | '×' => Ok(Operation::Multiply),
            '/' | '÷' => Ok(Operation::Divide),
            other => Err(InputError::UnknownOperation(other.to_string())),
        }
    }
}

impl From<Operation> for char {
    fn from(value: Operation) -> Self {
        value.symbol()
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operation::try_from(c),
            _ => Err(InputError::UnknownOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single validated digit key: `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == '0'
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii_digit() || value == '.' {
            Ok(Digit(value))
        } else {
            Err(InputError::InvalidDigit(value))
        }
    }
}

impl From<Digit> for char {
    fn from(value: Digit) -> Self {
        value.0
    }
}

impl FromStr for Digit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::try_from(c),
            (Some(c), Some(_)) => Err(InputError::InvalidDigit(c)),
            (None, _) => Err(InputError::InvalidDigit(' ')),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the keypad remembers between keystrokes.
///
/// Operands are kept as the literal keystrokes (leading zeros, trailing
/// point) and only parsed as numbers on evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub current_operand: String,
    pub previous_operand: String,
    pub operation: Option<Operation>,
    /// Set right after an evaluation; the next digit starts a fresh operand.
    pub overwrite: bool,
}

impl CalculatorState {
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}
