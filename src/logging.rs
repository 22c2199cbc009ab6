// Conditional logging macros - only active in debug builds

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_FILE_NAME: &str = "hangman.log";

/// Location of the log file used while the terminal UI owns the screen.
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("hangman").join(LOG_FILE_NAME))
}

/// Install `env_logger` as the `log` backend.
///
/// The filter defaults to `warn` and follows `RUST_LOG` when set. With
/// `to_file` the records are appended to [`log_file_path`] instead of stderr,
/// falling back to stderr when the file cannot be opened.
pub fn init_logging(to_file: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if to_file
        && let Some(path) = log_file_path()
        && let Some(file) = open_log_file(&path)
    {
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second initialization (e.g. from tests) is harmless.
    let _ = builder.try_init();
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_named_after_game() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("hangman/hangman.log"));
        }
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(false);
        init_logging(false);
    }
}
