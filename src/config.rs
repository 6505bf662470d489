//! Runtime configuration, read once from environment variables at startup.
//!
//! - `TUI_2048_SEED`: `u64` seed for a reproducible game (unset or invalid: OS entropy)
//! - `TUI_2048_LOG_DIR`: directory for log files (unset or empty: logging disabled)
//! - `TUI_2048_LOG`: log specification, e.g. `debug` or `tui_2048_core=trace` (default `info`)

use anyhow::Result;
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle};

use crate::core::GameState;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub log_dir: Option<String>,
    pub log_spec: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_dir: None,
            log_spec: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let seed = get("TUI_2048_SEED").and_then(|s| s.trim().parse().ok());

        let log_dir = get("TUI_2048_LOG_DIR")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_spec = get("TUI_2048_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            log_dir,
            log_spec,
        }
    }

    /// Start a game honoring the configured seed.
    pub fn new_game(&self) -> GameState {
        match self.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        }
    }

    /// Install the file logger if a log directory is configured.
    ///
    /// Logs never go to the terminal, which is owned by the renderer. The
    /// returned handle must be kept alive for as long as logging is wanted.
    pub fn init_logging(&self) -> Result<Option<LoggerHandle>> {
        let Some(dir) = &self.log_dir else {
            return Ok(None);
        };
        let handle = Logger::try_with_str(&self.log_spec)?
            .log_to_file(FileSpec::default().directory(dir).basename("tui-2048"))
            .format(detailed_format)
            .start()?;
        Ok(Some(handle))
    }
}
