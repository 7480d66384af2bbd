//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and runs the
//! background reader that turns the blocking terminal event source into a
//! channel the game loop can wait on.

pub mod events;
pub mod map;

pub use tui_2048_types as types;

pub use events::{spawn_event_reader, InputEvent};
pub use map::{handle_key_event, should_quit};
