use crate::types::BOARD_SIZE;

/// Plain copy of everything a renderer needs from a [`crate::GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub moves: u32,
    pub max_tile: u32,
    /// `(row, col)` of the most recently spawned tile.
    pub last_spawn: Option<(u8, u8)>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u32; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            game_over: false,
            episode_id: 0,
            moves: 0,
            max_tile: 0,
            last_spawn: None,
        }
    }
}
