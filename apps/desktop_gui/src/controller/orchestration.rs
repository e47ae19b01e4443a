//! Queueing of keypad events from widgets to the controller.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiEvent;

pub const QUEUE_FULL_STATUS: &str = "Keypad input queue is full; keystroke dropped";
pub const QUEUE_CLOSED_STATUS: &str = "Keypad controller stopped accepting input";

pub fn dispatch_ui_event(event_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) {
    let event_name = event.name();

    match event_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued keypad event"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = event_name, "keypad event queue is full");
            *status = QUEUE_FULL_STATUS.to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(event = event_name, "keypad event queue disconnected");
            *status = QUEUE_CLOSED_STATUS.to_string();
        }
    }
}
