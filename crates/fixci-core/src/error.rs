//! Error types for fixci operations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixciError {
    #[error("Task '{task}' failed")]
    TaskFailed { task: String },

    #[error("Command '{command}' exited with unexpected code {exit_code}")]
    ProcessFailed { command: String, exit_code: i32 },

    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    #[error("Fixture directory {dir:?} is not ready; run 'fixci fixture:create' first")]
    FixtureNotReady { dir: PathBuf },

    #[error("Cancelled by user")]
    UserCancelled,
}

impl FixciError {
    /// The status a command should yield when this error reaches the CLI.
    pub fn status(&self) -> crate::status::StatusCode {
        match self {
            FixciError::UserCancelled => crate::status::StatusCode::UserCancel,
            _ => crate::status::StatusCode::Error,
        }
    }
}

/// Result type for fixci operations
pub type Result<T> = std::result::Result<T, FixciError>;
