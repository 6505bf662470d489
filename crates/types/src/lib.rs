//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//! - **Spawned tiles**: always carry the value 2
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, BOARD_SIZE, CELL_COUNT};
//!
//! // Swipes step toward their target edge
//! let dir = Direction::Up;
//! assert_eq!(dir.step(), (-1, 0));
//! assert!(dir.is_vertical());
//!
//! // Key mappings produce game actions
//! let action = GameAction::Move(Direction::Left);
//! assert_ne!(action, GameAction::Restart);
//!
//! // Board dimensions
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(CELL_COUNT, 16);
//! ```

/// Board side length in cells (4 rows, 4 columns)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Value carried by every freshly spawned tile
pub const START_TILE_VALUE: u32 = 2;

/// Swipe directions.
///
/// The set is closed: any input that is not one of these four is rejected
/// by the caller's key mapping before it ever reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step toward the target edge as `(d_row, d_col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.step(), (-1, 0));
    /// assert_eq!(Direction::Down.step(), (1, 0));
    /// assert_eq!(Direction::Left.step(), (0, -1));
    /// assert_eq!(Direction::Right.step(), (0, 1));
    /// ```
    pub fn step(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// True for `Up` and `Down` (the sweep walks columns).
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Game actions that can be applied to modify game state
///
/// These are produced by the key mapping and consumed by
/// `GameState::apply_action` in the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Swipe all tiles toward one edge
    Move(Direction),
    /// Throw away the current game and start a fresh one
    Restart,
}
