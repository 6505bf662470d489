//! Terminal 2048 (workspace facade crate).
//!
//! Re-exports the member crates as `tui_2048::{core,input,term,types}` and owns
//! the runtime configuration used by the binary.

pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use config::AppConfig;
