//! Sequential task pipeline.

use crate::task::{Classification, Task, TaskOutcome};
use fixci_core::fixture::ensure_ready;
use fixci_core::{Result, StatusCode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Result of a complete CI run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CiOutcome {
    /// Per-task outcomes in execution order.
    pub outcomes: Vec<TaskOutcome>,

    /// Total duration in milliseconds.
    pub duration_ms: u64,
}

impl CiOutcome {
    /// Whether every task succeeded (an empty run is a success).
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(|o| o.succeeded())
    }

    /// Number of tasks that succeeded.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    /// Number of tasks that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }

    /// The status this run yields as a process exit code.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_success(self.success())
    }
}

/// Runs a task set strictly sequentially against a fixture.
pub struct CiPipeline;

impl CiPipeline {
    /// Execute every task to completion, one after another.
    ///
    /// Each subprocess is awaited before the next task starts; there is no
    /// parallel dispatch. A task whose process cannot run at all (spawn
    /// failure, timeout) is recorded as failed with exit code -1 and the
    /// pipeline continues, so every task gets a row in the report.
    ///
    /// Running a non-empty task set requires a scaffolded fixture;
    /// otherwise `FixtureNotReady` is returned before anything runs.
    pub async fn run(fixture_dir: &Path, tasks: Vec<Box<dyn Task>>) -> Result<CiOutcome> {
        let start = Instant::now();

        if !tasks.is_empty() {
            ensure_ready(fixture_dir)?;
        }

        let mut outcomes = Vec::with_capacity(tasks.len());

        for task in tasks {
            info!(task = task.label(), "executing task");

            let outcome = match task.execute(fixture_dir).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(task = task.label(), error = %e, "task could not run");
                    TaskOutcome {
                        task: task.label().to_string(),
                        exit_code: -1,
                        classification: Classification::Failed,
                        stdout: String::new(),
                        stderr: e.to_string(),
                        duration_ms: start.elapsed().as_millis() as u64,
                    }
                }
            };

            outcomes.push(outcome);
        }

        let result = CiOutcome {
            outcomes,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        if result.success() {
            info!(passed = result.passed_count(), "CI run passed");
        } else {
            info!(failed = result.failed_count(), "CI run failed");
        }

        Ok(result)
    }
}
