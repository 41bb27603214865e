//! Concrete lint and test tasks.
//!
//! Each task wraps one external binary with a fixed, tool-specific
//! argument vector and its own exit-code policy. Binary paths are
//! injectable so tests can substitute stub executables.

use crate::task::{ExitPolicy, Task};
use fixci_core::process::ToolInvocation;
use std::path::Path;

/// parallel-lint exits 254 when it finds nothing to check; an empty
/// fixture is not a lint failure.
const PHP_LINT_NO_FILES: &[i32] = &[254];

const LINT_TIMEOUT_SECS: u64 = 300;
const ANALYSIS_TIMEOUT_SECS: u64 = 600;
const UNIT_TIMEOUT_SECS: u64 = 1200;

/// PHP syntax lint over the fixture via parallel-lint.
pub struct PhpLintTask {
    binary_path: String,
}

impl PhpLintTask {
    pub fn new(binary_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }

    /// Default: use "parallel-lint" from PATH.
    pub fn from_path() -> Self {
        Self::new("parallel-lint")
    }
}

impl Task for PhpLintTask {
    fn label(&self) -> &str {
        "php_lint"
    }

    fn status_message(&self) -> String {
        "Linting PHP files".to_string()
    }

    fn invocation(&self, fixture_dir: &Path) -> ToolInvocation {
        ToolInvocation::new(
            &self.binary_path,
            vec![
                "--exclude".to_string(),
                "vendor".to_string(),
                "-e".to_string(),
                "php,module,theme,profile,install,inc".to_string(),
                "--colors".to_string(),
                "--blame".to_string(),
                ".".to_string(),
            ],
            fixture_dir,
        )
        .with_timeout(LINT_TIMEOUT_SECS)
    }

    fn policy(&self) -> ExitPolicy {
        ExitPolicy {
            benign: PHP_LINT_NO_FILES,
        }
    }
}

/// Static analysis over the fixture via PHPStan.
pub struct StaticAnalysisTask {
    binary_path: String,
}

impl StaticAnalysisTask {
    pub fn new(binary_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }

    /// Default: use "phpstan" from PATH.
    pub fn from_path() -> Self {
        Self::new("phpstan")
    }
}

impl Task for StaticAnalysisTask {
    fn label(&self) -> &str {
        "static_analysis"
    }

    fn status_message(&self) -> String {
        "Running static analysis".to_string()
    }

    fn invocation(&self, fixture_dir: &Path) -> ToolInvocation {
        ToolInvocation::new(
            &self.binary_path,
            vec![
                "analyse".to_string(),
                "--no-progress".to_string(),
                "--error-format".to_string(),
                "table".to_string(),
                ".".to_string(),
            ],
            fixture_dir,
        )
        .with_timeout(ANALYSIS_TIMEOUT_SECS)
    }

    fn policy(&self) -> ExitPolicy {
        ExitPolicy::STRICT
    }
}

/// YAML lint via the yaml-lint binary.
///
/// In CI runs the target is the fixture root; the hidden `lint:yaml`
/// command points it at an arbitrary path instead.
pub struct YamlLintTask {
    binary_path: String,
    target: String,
}

impl YamlLintTask {
    pub fn new(binary_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
            target: ".".to_string(),
        }
    }

    /// Default: use "yaml-lint" from PATH.
    pub fn from_path() -> Self {
        Self::new("yaml-lint")
    }

    /// Lint a specific path instead of the fixture root.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }
}

impl Task for YamlLintTask {
    fn label(&self) -> &str {
        "yaml_lint"
    }

    fn status_message(&self) -> String {
        format!("Linting YAML in {}", self.target)
    }

    fn invocation(&self, fixture_dir: &Path) -> ToolInvocation {
        ToolInvocation::new(
            &self.binary_path,
            vec![self.target.clone()],
            fixture_dir,
        )
        .with_timeout(LINT_TIMEOUT_SECS)
    }

    fn policy(&self) -> ExitPolicy {
        ExitPolicy::STRICT
    }
}

/// Unit tests via PHPUnit.
pub struct UnitTestTask {
    binary_path: String,
}

impl UnitTestTask {
    pub fn new(binary_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }

    /// Default: use "phpunit" from PATH.
    pub fn from_path() -> Self {
        Self::new("phpunit")
    }
}

impl Task for UnitTestTask {
    fn label(&self) -> &str {
        "unit_tests"
    }

    fn status_message(&self) -> String {
        "Running unit tests".to_string()
    }

    fn invocation(&self, fixture_dir: &Path) -> ToolInvocation {
        ToolInvocation::new(
            &self.binary_path,
            vec![
                "--colors=always".to_string(),
                "--do-not-cache-result".to_string(),
            ],
            fixture_dir,
        )
        .with_timeout(UNIT_TIMEOUT_SECS)
    }

    fn policy(&self) -> ExitPolicy {
        ExitPolicy::STRICT
    }
}
