//! The Task contract and exit-code classification.
//!
//! Every lint/test task exposes a label, a status message and an execute
//! operation; callers drive tasks polymorphically without knowing which
//! tool runs underneath. Exit-code interpretation is data: each task
//! declares the nonzero codes its tool uses for benign no-op results
//! (e.g. "no files found") and classification happens against that table.

use async_trait::async_trait;
use fixci_core::process::{ToolInvocation, ToolRunner};
use fixci_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Per-task table of nonzero exit codes treated as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitPolicy {
    /// Nonzero codes the tool documents as benign no-ops.
    pub benign: &'static [i32],
}

impl ExitPolicy {
    /// Policy with no benign codes: only exit 0 passes.
    pub const STRICT: ExitPolicy = ExitPolicy { benign: &[] };

    /// Classify a tool exit code under this policy.
    pub fn classify(&self, exit_code: i32) -> Classification {
        if exit_code == 0 {
            Classification::Passed
        } else if self.benign.contains(&exit_code) {
            Classification::Benign
        } else {
            Classification::Failed
        }
    }
}

/// What a tool exit code means for the task that ran it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Tool exited zero.
    Passed,

    /// Tool exited nonzero with a documented no-op code.
    Benign,

    /// Any other exit code.
    Failed,
}

/// Result of one task execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutcome {
    /// Task label.
    pub task: String,

    /// Tool exit code (-1 when the process never produced one).
    pub exit_code: i32,

    /// Classification of the exit code under the task's policy.
    pub classification: Classification,

    /// Captured stdout.
    pub stdout: String,

    /// Captured stderr.
    pub stderr: String,

    /// Duration in milliseconds.
    pub duration_ms: u64,
}

impl TaskOutcome {
    /// Whether this task counts as successful (passed or benign).
    pub fn succeeded(&self) -> bool {
        matches!(
            self.classification,
            Classification::Passed | Classification::Benign
        )
    }
}

/// A lint or test task driving exactly one external tool.
///
/// Constructed per CI invocation, executed once, discarded.
#[async_trait]
pub trait Task: Send + Sync {
    /// Short human name, e.g. "php_lint".
    fn label(&self) -> &str;

    /// Progress description shown before execution.
    fn status_message(&self) -> String;

    /// The exact tool command this task runs against the fixture.
    fn invocation(&self, fixture_dir: &Path) -> ToolInvocation;

    /// This task's exit-code classification table.
    fn policy(&self) -> ExitPolicy;

    /// Run the tool and classify its exit code.
    ///
    /// A classified failure is an outcome, not an error; `Err` is reserved
    /// for processes that could not run at all (spawn failure, timeout).
    async fn execute(&self, fixture_dir: &Path) -> Result<TaskOutcome> {
        info!(task = self.label(), "{}", self.status_message());

        let invocation = self.invocation(fixture_dir);
        let output = ToolRunner::run(&invocation).await?;
        let classification = self.policy().classify(output.exit_code);

        Ok(TaskOutcome {
            task: self.label().to_string(),
            exit_code: output.exit_code,
            classification,
            stdout: output.stdout,
            stderr: output.stderr,
            duration_ms: output.duration_ms,
        })
    }
}
