//! Error types for Settle
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Settle operations
pub type SettleResult<T> = Result<T, SettleError>;

/// Main error type for Settle operations
#[derive(Error, Debug)]
pub enum SettleError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The filesystem notification backend failed
    #[error("watch error: {0}")]
    Notify(#[from] notify::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// A watch target is not usable as declared
    #[error("invalid target '{target}': {message}")]
    InvalidTarget { target: String, message: String },

    /// Watch root does not exist or is not a directory
    #[error("watch root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// External command (build shell or viewer) could not be started
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External command exited unsuccessfully and the target asked to stop
    #[error("'{command}' failed{}", exit_suffix(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// The notification stream closed while the loop was still running
    #[error("file watcher stopped unexpectedly")]
    WatcherDisconnected,
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}
