//! Controller layer: keypad events, the reducer-owning controller, and event queueing.

pub mod events;
pub mod orchestration;
pub mod reducer;
