//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules: line resolution, the board, the move
//! engine, tile spawning and the game-over check. It has **no dependencies**
//! on terminal I/O, which makes it:
//!
//! - **Deterministic**: randomness is injected through [`TileRng`]; the same
//!   seed always produces the same game
//! - **Testable**: every rule is a plain function or method on [`Board`]
//! - **Allocation-free**: the grid is a fixed array and lines are copied by value
//!
//! # Module Structure
//!
//! - [`line`]: slide / merge / slide-merge-slide on a single row or column
//! - [`board`]: 4x4 grid, row/column views, move engine, spawner, playability
//! - [`rng`]: the [`TileRng`] seam and a seedable LCG
//! - [`scoring`]: score derived from the tiles on the board
//! - [`game_state`]: one play session (board + RNG + bookkeeping)
//! - [`snapshot`]: `Copy` view of a session for renderers
//!
//! # Rules
//!
//! - A move slides every line toward the chosen side and merges equal
//!   neighbours once per move, nearest the wall first
//! - If the grid changed and is not full, one tile of value 2 appears on a
//!   uniformly random empty cell
//! - The game is over when the grid is full and no two neighbours match
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let mut rng = SimpleRng::new(7);
//! let mut board = Board::from_cells([
//!     [1, 1, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]);
//!
//! let outcome = board.apply_move(Direction::Left, &mut rng);
//! assert!(outcome.changed);
//! assert_eq!(board.get(0, 0), Some(2));
//! assert!(outcome.spawned.is_some());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod line;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome};
pub use error::CoreError;
pub use game_state::GameState;
pub use line::{can_merge, merge, slide, slide_and_merge};
pub use rng::{ScriptedRng, SimpleRng, TileRng};
pub use scoring::{display_value, score_for_values, tile_score};
pub use snapshot::GameSnapshot;
