//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. The board is drawn into a
//! plain framebuffer (pure, testable), which the renderer then flushes to the
//! terminal with crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, GameView, Viewport, GAME_OVER_TEXT, TILE_COLORS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
