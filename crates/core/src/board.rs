//! Board module - manages the 4x4 tile grid
//!
//! Each cell holds a tile value, with 0 meaning empty. Uses a flat array for
//! zero-allocation access. Coordinates are `(row, col)`, both in 0..4, and are
//! only reachable through [`Pos`], so out-of-range access cannot be expressed.

use arrayvec::ArrayVec;

use crate::types::{Direction, BOARD_SIZE, CELL_COUNT};

/// Number of cells visited by one sweep (every cell except the target edge lane).
pub const SWEEP_LEN: usize = CELL_COUNT - BOARD_SIZE;

/// A bounded board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Returns `None` if either coordinate is outside the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Neighbor one cell toward `dir`, or `None` at the board edge.
    pub fn step(&self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.step();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Pos::new(row as usize, col as usize)
    }

    #[inline(always)]
    pub(crate) fn index(&self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }
}

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of tile values, row-major order (row * SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from explicit rows (0 for empty).
    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [0; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Copy the board out as rows.
    pub fn to_rows(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        self.write_rows(&mut rows);
        rows
    }

    /// Write the board into an existing row grid (allocation-free).
    pub fn write_rows(&self, out: &mut [[u32; BOARD_SIZE]; BOARD_SIZE]) {
        for (r, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE]);
        }
    }

    /// Get the tile value at `pos` (0 if empty)
    #[inline]
    pub fn get(&self, pos: Pos) -> u32 {
        self.cells[pos.index()]
    }

    /// Set the tile value at `pos`
    #[inline]
    pub fn set(&mut self, pos: Pos, value: u32) {
        self.cells[pos.index()] = value;
    }

    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos) == 0
    }

    /// Empty cells in row-major order.
    ///
    /// This is stack-only and does not allocate.
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| Pos::from_index(i))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn non_empty_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if any two orthogonally adjacent cells hold the same value.
    ///
    /// Empty cells count as values too; callers that care check emptiness first.
    pub fn has_adjacent_pair(&self) -> bool {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let v = self.cells[r * BOARD_SIZE + c];
                if c + 1 < BOARD_SIZE && self.cells[r * BOARD_SIZE + c + 1] == v {
                    return true;
                }
                if r + 1 < BOARD_SIZE && self.cells[(r + 1) * BOARD_SIZE + c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no adjacent equal pair: no swipe can change the board.
    pub fn is_stuck(&self) -> bool {
        if self.empty_count() != 0 {
            return false;
        }
        !self.has_adjacent_pair()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Order in which a swipe toward `dir` visits cells.
///
/// Lanes are columns for vertical swipes and rows for horizontal ones. Within a
/// lane, cells nearest the target edge come first and the edge cell itself is
/// skipped (it has nowhere to go).
pub fn sweep_order(dir: Direction) -> [Pos; SWEEP_LEN] {
    let mut out = [Pos { row: 0, col: 0 }; SWEEP_LEN];
    let mut i = 0;
    for lane in 0..BOARD_SIZE {
        for k in 1..BOARD_SIZE {
            // `k` is the distance from the target edge.
            let along = match dir {
                Direction::Up | Direction::Left => k,
                Direction::Down | Direction::Right => BOARD_SIZE - 1 - k,
            };
            let (row, col) = if dir.is_vertical() {
                (along, lane)
            } else {
                (lane, along)
            };
            out[i] = Pos {
                row: row as u8,
                col: col as u8,
            };
            i += 1;
        }
    }
    out
}
