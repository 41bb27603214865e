//! Job/phase dispatch onto task sets.

use crate::task::Task;
use crate::tasks::{PhpLintTask, StaticAnalysisTask, UnitTestTask, YamlLintTask};

/// Resolves (job, phase) identifiers to the tasks a CI run executes.
///
/// The table is closed and resolved at construction time. Job and phase
/// are free-form strings; pairs outside the catalog resolve to the empty
/// set, so arbitrary identifiers yield a clean OK run rather than an
/// argument error.
pub struct TaskSetBuilder;

impl TaskSetBuilder {
    /// Look up the task set for a job/phase pair.
    pub fn resolve(job: &str, phase: &str) -> Vec<Box<dyn Task>> {
        match (job, phase) {
            ("lint", "commit") => vec![
                Box::new(PhpLintTask::from_path()) as Box<dyn Task>,
                Box::new(YamlLintTask::from_path()),
            ],
            ("analysis", "commit") => vec![Box::new(StaticAnalysisTask::from_path())],
            ("unit", "test") => vec![Box::new(UnitTestTask::from_path())],
            _ => vec![],
        }
    }

    /// The job/phase pairs the catalog knows about.
    pub fn known_pairs() -> &'static [(&'static str, &'static str)] {
        &[("lint", "commit"), ("analysis", "commit"), ("unit", "test")]
    }
}
