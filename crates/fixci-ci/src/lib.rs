//! fixci CI - lint and test task orchestration
//!
//! Provides the task layer of fixci:
//! - A uniform Task contract over heterogeneous external tools
//! - Per-task exit-code policies (benign codes are data, not exceptions)
//! - Job/phase dispatch onto task sets
//! - A strictly sequential pipeline with table reporting

pub mod dispatch;
pub mod pipeline;
pub mod report;
pub mod task;
pub mod tasks;

// Re-export key types
pub use dispatch::TaskSetBuilder;
pub use pipeline::{CiOutcome, CiPipeline};
pub use report::render_status_table;
pub use task::{Classification, ExitPolicy, Task, TaskOutcome};
pub use tasks::{PhpLintTask, StaticAnalysisTask, UnitTestTask, YamlLintTask};
