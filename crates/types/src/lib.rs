//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable from the engine,
//! the input mapping and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 4 columns (indexed 0-3)
//! - **Height**: 4 rows (indexed 0-3)
//!
//! # Power Levels
//!
//! Cells store a power level rather than the displayed tile value:
//!
//! | Power | Tile |
//! |-------|------|
//! | 0 | empty |
//! | 1 | 2 |
//! | 2 | 4 |
//! | 11 | 2048 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.step(), -1);
//!
//! assert_eq!(Direction::try_from(3), Ok(Direction::Down));
//! assert!(Direction::try_from(7).is_err());
//!
//! assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::Move(Direction::Up)));
//!
//! assert_eq!(BOARD_WIDTH, 4);
//! assert_eq!(BOARD_HEIGHT, 4);
//! ```

use thiserror::Error;

/// Board width in cells (4 columns)
pub const BOARD_WIDTH: usize = 4;

/// Board height in cells (4 rows)
pub const BOARD_HEIGHT: usize = 4;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Power level stored in a cell. 0 is empty, `n` displays as `2^n`.
pub type Power = u8;

/// Power level of an empty cell
pub const EMPTY: Power = 0;

/// Power level of a freshly spawned tile (displayed as 2)
pub const BASE_TILE_POWER: Power = 1;

/// Number of tiles placed on a new board
pub const INITIAL_TILES: usize = 2;

/// Target tile value
pub const GOAL_VALUE: u32 = 2048;

/// Power level of [`GOAL_VALUE`]
pub const GOAL_POWER: Power = 11;

/// The playing grid, row-major: `grid[y][x]`
pub type Grid = [[Power; BOARD_WIDTH]; BOARD_HEIGHT];

/// The four move directions
///
/// Left and Right act on rows, Up and Down on columns. The declaration order
/// matches the integer codes accepted by `TryFrom<i32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Rejected direction input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionError {
    #[error("invalid direction code {0} (expected 0..=3)")]
    InvalidCode(i32),
    #[error("invalid direction name {0:?}")]
    InvalidName(String),
}

impl Direction {
    /// All directions in code order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Unit step along the affected line: -1 toward index 0, +1 toward the far end.
    pub fn step(self) -> i8 {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }

    /// True for directions that move columns (Up/Down).
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Integer code (0 = Left, 1 = Up, 2 = Right, 3 = Down)
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = DirectionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            other => Err(DirectionError::InvalidCode(other)),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_str(s).ok_or_else(|| DirectionError::InvalidName(s.to_string()))
    }
}

/// Game actions that can be applied to a session
///
/// Produced by the input layer and consumed by `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge the whole board in one direction
    Move(Direction),
    /// Throw away the current board and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}

/// A board coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellLocation {
    pub x: usize,
    pub y: usize,
}

impl CellLocation {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
