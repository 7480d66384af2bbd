//! Board module - manages the game grid
//!
//! The board is a 4x4 grid of power levels (0 = empty, n = tile 2^n).
//! Storage is a fixed 2D array, so copies are cheap and moves never allocate.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom).
//!
//! Besides grid access this module hosts the move engine ([`Board::apply_move`]),
//! the tile spawner ([`Board::add_tile`]) and the playability check
//! ([`Board::playable`]).

use arrayvec::ArrayVec;

use crate::error::CoreError;
use crate::line::{can_merge, slide_and_merge};
use crate::rng::TileRng;
use crate::types::{
    CellLocation, Direction, Grid, Power, BASE_TILE_POWER, BOARD_HEIGHT, BOARD_SIZE,
    BOARD_WIDTH, EMPTY, GOAL_POWER, INITIAL_TILES,
};

/// One row of the board
pub type Row = [Power; BOARD_WIDTH];

/// One column of the board
pub type Col = [Power; BOARD_HEIGHT];

/// What a call to [`Board::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// At least one cell differs from the pre-move grid.
    pub changed: bool,
    /// Where the follow-up tile landed, if one was spawned.
    pub spawned: Option<CellLocation>,
}

/// The game board - 4 columns x 4 rows of power levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    goal: Power,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::from_cells([[EMPTY; BOARD_WIDTH]; BOARD_HEIGHT])
    }

    /// Create a board holding a specific position
    pub fn from_cells(cells: Grid) -> Self {
        Self {
            cells,
            goal: GOAL_POWER,
        }
    }

    /// Create a fresh game board with `INITIAL_TILES` tiles spawned
    pub fn new_game(rng: &mut impl TileRng) -> Self {
        let mut board = Self::new();
        for _ in 0..INITIAL_TILES {
            // An empty 4x4 board always has room for the opening tiles.
            let _ = board.add_tile(rng);
        }
        board
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Goal power level (informational, never enforced)
    pub fn goal(&self) -> Power {
        self.goal
    }

    /// The full grid, row-major
    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Power> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, power: Power) -> bool {
        match self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                *cell = power;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.cells.get(y)
    }

    pub fn set_row(&mut self, y: usize, values: Row) -> bool {
        match self.cells.get_mut(y) {
            Some(row) => {
                *row = values;
                true
            }
            None => false,
        }
    }

    /// Copy column `x` out of the grid, top to bottom
    pub fn col(&self, x: usize) -> Option<Col> {
        if x >= BOARD_WIDTH {
            return None;
        }
        Some(std::array::from_fn(|y| self.cells[y][x]))
    }

    pub fn set_col(&mut self, x: usize, values: Col) -> bool {
        if x >= BOARD_WIDTH {
            return false;
        }
        for (row, value) in self.cells.iter_mut().zip(values) {
            row[x] = value;
        }
        true
    }

    /// Every empty cell in row-major order
    pub fn empty_cells(&self) -> ArrayVec<CellLocation, BOARD_SIZE> {
        let mut out = ArrayVec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == EMPTY {
                    out.push(CellLocation::new(x, y));
                }
            }
        }
        out
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }

    /// All non-empty power levels in row-major order, without positions
    pub fn values(&self) -> ArrayVec<Power, BOARD_SIZE> {
        self.cells
            .iter()
            .flatten()
            .copied()
            .filter(|&p| p != EMPTY)
            .collect()
    }

    /// Largest power on the board (0 when empty)
    pub fn highest_power(&self) -> Power {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// True once any tile has reached the goal power
    pub fn reached_goal(&self) -> bool {
        self.highest_power() >= self.goal
    }

    /// Put a base tile on a uniformly chosen empty cell
    ///
    /// Returns `CoreError::BoardFull` without touching the grid when there is
    /// nowhere to put it.
    pub fn add_tile(&mut self, rng: &mut impl TileRng) -> Result<CellLocation, CoreError> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return Err(CoreError::BoardFull);
        }

        let loc = empty[rng.next_index(empty.len()) % empty.len()];
        self.cells[loc.y][loc.x] = BASE_TILE_POWER;
        Ok(loc)
    }

    /// Slide and merge every line toward `direction`, then spawn one tile if
    /// the grid changed and still has room
    pub fn apply_move(&mut self, direction: Direction, rng: &mut impl TileRng) -> MoveOutcome {
        let before = self.cells;

        self.shift(direction);

        let changed = self.cells != before;
        let spawned = if changed && !self.is_full() {
            self.add_tile(rng).ok()
        } else {
            None
        };

        MoveOutcome { changed, spawned }
    }

    /// Resolve all lines toward `direction` without spawning
    pub fn shift(&mut self, direction: Direction) {
        let step = direction.step();
        if direction.is_vertical() {
            for x in 0..BOARD_WIDTH {
                if let Some(col) = self.col(x) {
                    self.set_col(x, slide_and_merge(col, step));
                }
            }
        } else {
            for row in self.cells.iter_mut() {
                *row = slide_and_merge(*row, step);
            }
        }
    }

    /// Whether any move is still possible
    ///
    /// An empty cell always leaves a move. On a full board a move exists iff
    /// some row or column holds two equal neighbours.
    pub fn playable(&self) -> bool {
        if !self.is_full() {
            return true;
        }

        self.cells.iter().any(|row| can_merge(*row))
            || (0..BOARD_WIDTH).any(|x| self.col(x).is_some_and(can_merge))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
