//! Composer (dependency manager) adapter.
//!
//! Thin wrapper over the `composer` binary. The argv builders are pure so
//! tests can assert the exact command line without spawning anything.

use crate::error::{FixciError, Result};
use crate::process::{ToolInvocation, ToolOutput, ToolRunner};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default timeout for create-project; scaffolding pulls dependencies.
const CREATE_PROJECT_TIMEOUT_SECS: u64 = 900;

/// Wrapper around the Composer command-line tool.
pub struct ComposerAdapter {
    /// Path to the composer binary.
    binary_path: String,

    /// Working directory composer is invoked from.
    cwd: PathBuf,
}

impl ComposerAdapter {
    /// Create an adapter using an explicit binary path.
    pub fn new(binary_path: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            binary_path: binary_path.into(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    /// Default: use "composer" from PATH, invoked from the current directory.
    pub fn from_path() -> Self {
        Self::new("composer", ".")
    }

    /// Build the create-project invocation.
    ///
    /// The template string, stability flag and target directory are
    /// forwarded unchanged.
    pub fn create_project_invocation(
        &self,
        template: &str,
        stability: &str,
        directory: &str,
    ) -> ToolInvocation {
        ToolInvocation::new(
            &self.binary_path,
            vec![
                "create-project".to_string(),
                "--stability".to_string(),
                stability.to_string(),
                "--no-interaction".to_string(),
                template.to_string(),
                directory.to_string(),
            ],
            &self.cwd,
        )
        .with_timeout(CREATE_PROJECT_TIMEOUT_SECS)
    }

    /// Scaffold a new project directory from a package template.
    ///
    /// Scaffolding has no benign exit codes: any nonzero exit is a failure.
    pub async fn create_project(
        &self,
        template: &str,
        stability: &str,
        directory: &str,
    ) -> Result<ToolOutput> {
        let invocation = self.create_project_invocation(template, stability, directory);

        info!(template, stability, directory, "creating project");

        let output = ToolRunner::run(&invocation).await?;
        if !output.success() {
            return Err(FixciError::ProcessFailed {
                command: invocation.display(),
                exit_code: output.exit_code,
            });
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_argv_forwards_parameters_unchanged() {
        let adapter = ComposerAdapter::from_path();
        let inv = adapter.create_project_invocation("vendor/package:^1", "dev", "/tmp/fixture");

        assert_eq!(inv.program, "composer");
        assert_eq!(inv.args[0], "create-project");
        assert!(inv.args.contains(&"vendor/package:^1".to_string()));
        assert!(inv.args.contains(&"dev".to_string()));
        assert!(inv.args.contains(&"/tmp/fixture".to_string()));

        // Stability flag must immediately follow its option.
        let pos = inv.args.iter().position(|a| a == "--stability").unwrap();
        assert_eq!(inv.args[pos + 1], "dev");

        // Template precedes the target directory.
        let tpl = inv.args.iter().position(|a| a == "vendor/package:^1").unwrap();
        let dir = inv.args.iter().position(|a| a == "/tmp/fixture").unwrap();
        assert!(tpl < dir);
    }

    #[test]
    fn test_custom_binary_path() {
        let adapter = ComposerAdapter::new("/usr/local/bin/composer2", "/work");
        let inv = adapter.create_project_invocation("a/b", "stable", "out");
        assert_eq!(inv.program, "/usr/local/bin/composer2");
        assert_eq!(inv.cwd, PathBuf::from("/work"));
    }

    #[tokio::test]
    async fn test_create_project_failure_is_process_failed() {
        // "false" ignores its arguments and exits 1.
        let adapter = ComposerAdapter::new("false", ".");
        let err = adapter
            .create_project("vendor/package", "dev", "/tmp/nowhere")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FixciError::ProcessFailed { exit_code: 1, .. }
        ));
    }
}
