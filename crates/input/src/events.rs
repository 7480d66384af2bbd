//! Background terminal event reader.
//!
//! `crossterm::event::read` blocks, so it runs on its own thread and forwards
//! what the game cares about through a channel. The game loop stays the only
//! owner of the game state and simply waits on the receiver.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events forwarded to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press (repeats and releases are dropped).
    Key(KeyEvent),
    /// The terminal changed size.
    Resize(u16, u16),
}

/// Translate a raw terminal event. Returns `None` for events the game ignores.
pub fn translate(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Key(key)),
        Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        _ => None,
    }
}

/// Spawn the reader thread and return the receiving end of its queue.
///
/// The thread exits when the receiver is dropped or the event source fails;
/// a read error is forwarded once so the loop can report it.
pub fn spawn_event_reader() -> io::Result<Receiver<io::Result<InputEvent>>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || pump(tx))?;
    Ok(rx)
}

fn pump(tx: Sender<io::Result<InputEvent>>) {
    loop {
        match event::read() {
            Ok(ev) => {
                let Some(ev) = translate(ev) else { continue };
                if tx.send(Ok(ev)).is_err() {
                    return;
                }
            }
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        }
    }
}
