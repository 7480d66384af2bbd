//! Terminal 2048 runner (default binary).
//!
//! Arrow keys, `hjkl` or `wasd` move, `r` restarts, `q`/`Esc`/`Ctrl-C` quit.
//! See [`tui_2048::config::AppConfig::from_env`] for the environment knobs.

use anyhow::Result;

use tui_2048::app;
use tui_2048::config::AppConfig;
use tui_2048::logging;
use tui_2048::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = app::run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting with error");
    }
    result
}
