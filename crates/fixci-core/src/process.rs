//! Subprocess execution with captured output.
//!
//! The runner spawns one external tool, waits for completion and surfaces
//! the exit code untouched. Callers decide what a nonzero code means; this
//! layer only distinguishes "ran to completion" from "could not run".

use crate::error::{FixciError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

/// One external tool run: program, argument vector, working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Executable name or path.
    pub program: String,

    /// Arguments, in order.
    pub args: Vec<String>,

    /// Working directory for the process.
    pub cwd: PathBuf,

    /// Timeout in seconds; 0 disables the deadline.
    pub timeout_secs: u64,
}

impl ToolInvocation {
    /// Create an invocation with the given working directory.
    pub fn new(program: impl Into<String>, args: Vec<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: cwd.as_ref().to_path_buf(),
            timeout_secs: 0,
        }
    }

    /// Set the timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Command line rendered for log and error messages.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Captured result of a completed tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code; -1 when the process terminated without one.
    pub exit_code: i32,

    /// Captured stdout.
    pub stdout: String,

    /// Captured stderr.
    pub stderr: String,

    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl ToolOutput {
    /// Whether the tool exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawns external tools and captures their output.
pub struct ToolRunner;

impl ToolRunner {
    /// Run one tool to completion.
    ///
    /// Returns the exit code and captured streams for any process that
    /// ran, nonzero codes included. Fails only when the process could not
    /// be spawned or exceeded its deadline.
    pub async fn run(invocation: &ToolInvocation) -> Result<ToolOutput> {
        let start = Instant::now();

        debug!(command = %invocation.display(), cwd = %invocation.cwd.display(), "spawning tool");

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FixciError::Spawn {
                command: invocation.display(),
                source,
            })?;

        let output = if invocation.timeout_secs > 0 {
            tokio::time::timeout(
                std::time::Duration::from_secs(invocation.timeout_secs),
                child.wait_with_output(),
            )
            .await
            .map_err(|_| FixciError::Timeout {
                command: invocation.display(),
                timeout_secs: invocation.timeout_secs,
            })?
            .map_err(|source| FixciError::Spawn {
                command: invocation.display(),
                source,
            })?
        } else {
            child
                .wait_with_output()
                .await
                .map_err(|source| FixciError::Spawn {
                    command: invocation.display(),
                    source,
                })?
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        let exit_code = output.status.code().unwrap_or(-1);

        debug!(command = %invocation.display(), exit_code, duration_ms, "tool finished");

        Ok(ToolOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration_ms,
        })
    }
}
