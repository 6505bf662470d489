//! Game state module - owns the grid, score and game-over flag
//!
//! All mutation goes through [`GameState::update`] (one swipe) and the
//! constructors / restart. Each update sweeps the board toward the target edge,
//! sliding tiles through empty cells and merging equal neighbors at most once
//! per tile, then spawns a single 2-tile if anything changed.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{sweep_order, Board, Pos};
use crate::types::{Direction, GameAction, CELL_COUNT, START_TILE_VALUE};

/// What one call to [`GameState::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSummary {
    /// Any tile changed position or value.
    pub moved: bool,
    /// Number of merges performed.
    pub merges: u8,
    /// Sum of the values of every tile formed by a merge.
    pub score_gained: u32,
    /// Where the new tile landed, if one was spawned.
    pub spawned: Option<Pos>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    score: u32,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Number of updates that moved at least one tile in this episode.
    moves: u32,
    last_spawn: Option<Pos>,
    rng: R,
}

impl GameState<StdRng> {
    /// Create a new game with a deterministic RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a new game seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game driven by `rng`: empty board plus one starting tile.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            score: 0,
            game_over: false,
            episode_id: 0,
            moves: 0,
            last_spawn: None,
            rng,
        };
        state.spawn_tile();
        state
    }

    /// Resume from a known position. No tile is spawned.
    ///
    /// Any `u32` values are accepted. Merged tiles and the score saturate at
    /// `u32::MAX` instead of overflowing.
    pub fn from_board(board: Board, score: u32, rng: R) -> Self {
        Self {
            game_over: board.is_stuck(),
            board,
            score,
            episode_id: 0,
            moves: 0,
            last_spawn: None,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Position of the most recently spawned tile.
    pub fn last_spawn(&self) -> Option<Pos> {
        self.last_spawn
    }

    /// Swipe every tile toward `dir`.
    ///
    /// Ignored once the game is over. A swipe that changes nothing still
    /// re-evaluates game over but does not spawn.
    pub fn update(&mut self, dir: Direction) -> MoveSummary {
        let mut summary = MoveSummary::default();
        if self.game_over {
            return summary;
        }

        // Per-swipe merge flags, indexed by cell.
        let mut merged = [false; CELL_COUNT];

        for start in sweep_order(dir) {
            if !self.board.is_empty_at(start) {
                self.slide(start, dir, &mut merged, &mut summary);
            }
        }

        if summary.moved {
            self.moves = self.moves.wrapping_add(1);
            summary.spawned = self.spawn_tile();
        }

        self.game_over = self.board.is_stuck();
        if self.game_over {
            debug!(
                "game over: episode={} score={} moves={} max_tile={}",
                self.episode_id,
                self.score,
                self.moves,
                self.board.max_tile()
            );
        }

        summary
    }

    /// Move one tile toward `dir` until it merges, is blocked, or hits the edge.
    fn slide(
        &mut self,
        start: Pos,
        dir: Direction,
        merged: &mut [bool; CELL_COUNT],
        summary: &mut MoveSummary,
    ) {
        let mut cur = start;
        while let Some(next) = cur.step(dir) {
            let value = self.board.get(cur);
            let target = self.board.get(next);

            if target != 0 && target == value && !merged[cur.index()] && !merged[next.index()] {
                let doubled = target.saturating_mul(2);
                self.board.set(cur, 0);
                self.board.set(next, doubled);
                self.score = self.score.saturating_add(doubled);
                merged[next.index()] = true;
                summary.moved = true;
                summary.merges += 1;
                summary.score_gained = summary.score_gained.saturating_add(doubled);
                return;
            }

            if target == 0 && value != 0 {
                self.board.set(next, value);
                self.board.set(cur, 0);
                summary.moved = true;
                cur = next;
                continue;
            }

            return;
        }
    }

    /// Place a 2-tile on a uniformly chosen empty cell.
    fn spawn_tile(&mut self) -> Option<Pos> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let pos = empty[self.rng.gen_range(0..empty.len())];
        self.board.set(pos, START_TILE_VALUE);
        self.last_spawn = Some(pos);
        trace!("spawned {} at ({}, {})", START_TILE_VALUE, pos.row(), pos.col());
        Some(pos)
    }

    /// Start over on a fresh board, continuing the same random stream.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(
            "restart: episode={} previous_score={}",
            self.episode_id, self.score
        );
        self.board.clear();
        self.score = 0;
        self.game_over = false;
        self.moves = 0;
        self.last_spawn = None;
        self.spawn_tile();
    }

    /// Apply a game action. Returns true if the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.update(dir).moved,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        self.board.write_rows(&mut out.board);
        out.score = self.score;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.last_spawn = self.last_spawn.map(|p| (p.row() as u8, p.col() as u8));
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
