//! Process status codes for CI commands.
//!
//! A sysexits-inspired subset: every command execution path terminates by
//! yielding exactly one of these, propagated as the process exit code.

use serde::{Deserialize, Serialize};

/// Closed set of exit codes a fixci command may yield.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    /// Everything passed.
    Ok,

    /// Generic failure (a task or subprocess failed).
    Error,

    /// User aborted interactively (EX_TEMPFAIL).
    UserCancel,
}

impl StatusCode {
    /// The process exit code for this status.
    pub fn code(&self) -> i32 {
        match self {
            StatusCode::Ok => 0,
            StatusCode::Error => 1,
            StatusCode::UserCancel => 75,
        }
    }

    /// Map an aggregate success flag to a status.
    pub fn from_success(success: bool) -> Self {
        if success {
            StatusCode::Ok
        } else {
            StatusCode::Error
        }
    }

    /// Whether this status signals success.
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}
