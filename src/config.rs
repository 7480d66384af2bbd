//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default wait for the next input event before the loop re-checks its queue
pub const DEFAULT_TICK_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// RNG seed for the first game.
    pub seed: u32,
    /// Log file. `None` disables logging (the terminal is in raw mode).
    pub log_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    pub tick: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `TUI_2048_SEED`: u32 seed (default: wall-clock seconds)
    /// - `TUI_2048_LOG_PATH`: log file path (default: no logging)
    /// - `TUI_2048_LOG`: tracing filter (default: `info`)
    /// - `TUI_2048_TICK_MS`: input wait in milliseconds (default: 50)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("TUI_2048_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = non_empty("TUI_2048_LOG_PATH").map(PathBuf::from);

        let log_filter = non_empty("TUI_2048_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let tick_ms = non_empty("TUI_2048_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(DEFAULT_TICK_MS);

        Self {
            seed,
            log_path,
            log_filter,
            tick: Duration::from_millis(tick_ms),
        }
    }
}

/// Seed derived from the wall clock, in whole seconds.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
