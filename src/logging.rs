//! Logger initialisation
//!
//! The library only uses the `log` facade. The binary installs `env_logger`
//! once, writing either to stderr or, when the TUI owns the terminal, to a
//! log file.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Map `-v` occurrences to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Default log file: `<cache dir>/wordle_game/wordle_game.log`
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("wordle_game").join("wordle_game.log"))
}

/// Install the global logger
///
/// `RUST_LOG` takes precedence over `verbosity`. With `log_file` set, output
/// is written there (parent directories are created); otherwise to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is
/// already installed.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level_for(verbosity).as_str()));

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Logger already initialised")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn default_log_path_is_in_app_dir() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("wordle_game/wordle_game.log"));
        }
    }
}
