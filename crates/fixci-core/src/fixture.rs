//! Fixture scaffolding.
//!
//! A fixture is a disposable project directory used as the target of the
//! lint/test tasks. It is scaffolded once via Composer create-project and
//! thrown away after the run.

use crate::composer::ComposerAdapter;
use crate::error::{FixciError, Result};
use std::path::Path;
use tracing::info;

/// One-shot request to scaffold a fixture codebase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodebaseSpec {
    /// Composer package template, e.g. "vendor/project-template:^1".
    pub template: String,

    /// Acceptable package maturity: dev, alpha, beta, RC, stable.
    pub stability: String,

    /// Target directory for the scaffolded project.
    pub directory: String,
}

impl CodebaseSpec {
    pub fn new(
        template: impl Into<String>,
        stability: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            stability: stability.into(),
            directory: directory.into(),
        }
    }
}

/// Scaffolds fixture codebases through the Composer adapter.
pub struct CodebaseCreator {
    composer: ComposerAdapter,
}

impl CodebaseCreator {
    pub fn new(composer: ComposerAdapter) -> Self {
        Self { composer }
    }

    /// Scaffold the fixture described by `spec`.
    ///
    /// Delegates to create-project with the spec's three parameters
    /// unchanged; adapter failures propagate untouched.
    pub async fn create(&self, spec: &CodebaseSpec) -> Result<()> {
        self.composer
            .create_project(&spec.template, &spec.stability, &spec.directory)
            .await?;

        info!(directory = %spec.directory, "fixture scaffolded");
        Ok(())
    }
}

/// Check that a fixture directory has been scaffolded.
///
/// Ready means the directory exists and contains the composer.json that
/// create-project writes.
pub fn ensure_ready(dir: &Path) -> Result<()> {
    if dir.is_dir() && dir.join("composer.json").is_file() {
        return Ok(());
    }
    Err(FixciError::FixtureNotReady {
        dir: dir.to_path_buf(),
    })
}
