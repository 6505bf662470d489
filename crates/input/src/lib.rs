//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every swipe is
//! a single discrete action, so there is no repeat or timing state here.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
