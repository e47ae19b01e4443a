//! UI layer for the keypad window: app shell, keypad widgets and themes.

pub mod app;
pub mod keypad;
pub mod theme;

pub use app::{KeypadApp, StartupConfig};
