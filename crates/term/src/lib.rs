//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to a terminal
//! backend, without any widget or layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure: [`GameView`] only reads a snapshot and writes cells
//! - Allow precise control over tile proportions in character cells

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_bg, tile_fg, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
