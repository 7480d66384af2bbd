//! Game loop: input events in, frames out.
//!
//! The session is an explicit [`GameState`] value threaded through
//! [`handle_event`]; the loop in [`run`] is its only owner.

use std::sync::mpsc::RecvTimeoutError;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::GameState;
use crate::input::{handle_key_event, should_quit, spawn_event_reader, InputEvent};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::GameAction;

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Nothing visible changed.
    Continue,
    /// Render a new frame.
    Redraw,
    /// Leave the loop.
    Quit,
}

/// Apply one input event to the session.
pub fn handle_event(game: &mut GameState, event: InputEvent) -> Flow {
    let key = match event {
        InputEvent::Resize(w, h) => {
            debug!(width = w, height = h, "terminal resized");
            return Flow::Redraw;
        }
        InputEvent::Key(key) => key,
    };

    if should_quit(key) {
        info!(
            episode = game.episode_id(),
            moves = game.moves(),
            score = game.score(),
            "quit"
        );
        return Flow::Quit;
    }

    let Some(action) = handle_key_event(key) else {
        return Flow::Continue;
    };

    let was_over = game.game_over();
    let changed = match action {
        GameAction::Move(direction) => {
            let outcome = game.play(direction);
            let changed = outcome.is_some_and(|o| o.changed);
            debug!(
                direction = direction.as_str(),
                changed,
                spawned = ?outcome.and_then(|o| o.spawned),
                score = game.score(),
                "move"
            );
            changed
        }
        GameAction::Restart => {
            game.restart();
            info!(episode = game.episode_id(), seed = game.seed(), "restart");
            true
        }
    };

    if game.game_over() && !was_over {
        info!(
            episode = game.episode_id(),
            moves = game.moves(),
            score = game.score(),
            highest = crate::core::display_value(game.board().highest_power()),
            "game over"
        );
    }

    if changed || game.game_over() != was_over {
        Flow::Redraw
    } else {
        Flow::Continue
    }
}

/// Run the game until the player quits.
pub fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let events = spawn_event_reader().context("start input reader")?;

    let mut game = GameState::new(config.seed);
    info!(seed = game.seed(), "new game");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = current_viewport();

    view.render_into(&game.snapshot(), viewport, &mut fb);
    term.draw(&fb)?;

    loop {
        let flow = match events.recv_timeout(config.tick) {
            Ok(Ok(event)) => {
                if let InputEvent::Resize(w, h) = event {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                handle_event(&mut game, event)
            }
            Ok(Err(e)) => return Err(e).context("read terminal event"),
            Err(RecvTimeoutError::Timeout) => {
                // Some terminals never report resizes; notice them here.
                let now = current_viewport();
                if now == viewport {
                    continue;
                }
                viewport = now;
                term.invalidate();
                Flow::Redraw
            }
            Err(RecvTimeoutError::Disconnected) => bail!("input reader stopped"),
        };

        match flow {
            Flow::Quit => return Ok(()),
            Flow::Continue => {}
            Flow::Redraw => {
                view.render_into(&game.snapshot(), viewport, &mut fb);
                term.draw(&fb)?;
            }
        }
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
