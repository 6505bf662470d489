//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the 4x4 board, sliding and merging,
//! tile spawning, scoring, and the game-over test. It has **zero dependencies**
//! on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Any position can be loaded with [`GameState::from_board`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 tile grid, bounded coordinates and swipe order
//! - [`game_state`]: Grid, score and game-over flag plus the swipe update
//! - [`snapshot`]: Copyable view handed to renderers
//!
//! # Game Rules
//!
//! - A new game starts with a single 2-tile on a random cell
//! - A swipe slides every tile toward one edge through empty cells
//! - Two equal neighbors merge into one tile of double value; each tile merges at most once per swipe
//! - Every merge adds the new tile's value to the score
//! - A swipe that changed anything spawns one 2-tile on a uniformly chosen empty cell
//! - The game is over when the board is full and no two neighbors are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState};
//! use tui_2048_types::Direction;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! let mut game = GameState::from_board(board, 0, StdRng::seed_from_u64(1));
//!
//! let summary = game.update(Direction::Left);
//! assert!(summary.moved);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.board().max_tile(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{sweep_order, Board, Pos};
pub use game_state::{GameState, MoveSummary};
pub use snapshot::GameSnapshot;
