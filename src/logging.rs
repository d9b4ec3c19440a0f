//! Tracing subscriber setup

use anyhow::Result;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Log file used while the terminal UI owns the screen
pub const TUI_LOG_FILE: &str = "word_scramble.log";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error, for line-oriented commands
    Stderr,
    /// A file, for the full-screen interface
    File(&'a Path),
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default level (`info` for file logging, `warn`
/// for stderr). Calling this more than once is harmless.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter("warn"))
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let log_file = File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter("info"))
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        assert!(init(LogTarget::Stderr).is_ok());
        assert!(init(LogTarget::Stderr).is_ok());
    }

    #[test]
    fn file_target_creates_file() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_log_{}.log",
            std::process::id()
        ));
        assert!(init(LogTarget::File(&path)).is_ok());
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }
}
