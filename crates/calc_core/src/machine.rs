use shared::{
    domain::{CalculatorState, Digit, Operation},
    protocol::Action,
};

use crate::evaluate::evaluate;

/// Folds one keypad action into the calculator state.
///
/// The input state is consumed and a new one returned; actions that do not
/// apply to the current state return it unchanged.
pub fn transition(state: CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

/// Applies a sequence of actions starting from `state`.
pub fn replay<I>(state: CalculatorState, actions: I) -> CalculatorState
where
    I: IntoIterator<Item = Action>,
{
    actions.into_iter().fold(state, transition)
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: digit.to_string(),
            overwrite: false,
            ..state
        };
    }
    if digit.is_zero() && state.current_operand == "0" {
        tracing::trace!("ignored repeated leading zero");
        return state;
    }
    if digit.is_point() && state.current_operand.contains('.') {
        tracing::trace!("ignored second decimal point");
        return state;
    }

    let mut current_operand = state.current_operand;
    current_operand.push(digit.as_char());
    CalculatorState {
        current_operand,
        ..state
    }
}

fn choose_operation(state: CalculatorState, operation: Operation) -> CalculatorState {
    if state.current_operand.is_empty() && state.previous_operand.is_empty() {
        tracing::trace!(%operation, "ignored operation without operands");
        return state;
    }
    if state.current_operand.is_empty() {
        return CalculatorState {
            operation: Some(operation),
            ..state
        };
    }
    if state.previous_operand.is_empty() {
        return CalculatorState {
            previous_operand: state.current_operand,
            current_operand: String::new(),
            operation: Some(operation),
            overwrite: false,
        };
    }

    CalculatorState {
        previous_operand: evaluate(&state),
        current_operand: String::new(),
        operation: Some(operation),
        overwrite: false,
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: String::new(),
            overwrite: false,
            ..state
        };
    }
    if state.current_operand.is_empty() {
        tracing::trace!("ignored delete on empty operand");
        return state;
    }

    let mut current_operand = state.current_operand;
    current_operand.pop();
    CalculatorState {
        current_operand,
        ..state
    }
}

fn evaluate_pending(state: CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_empty()
        || state.previous_operand.is_empty()
    {
        tracing::trace!("ignored evaluate without a complete expression");
        return state;
    }

    CalculatorState {
        current_operand: evaluate(&state),
        previous_operand: String::new(),
        operation: None,
        overwrite: true,
    }
}
