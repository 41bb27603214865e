//! fixci - fixture-based CI orchestration
//!
//! The `fixci` command scaffolds disposable Composer fixtures and drives
//! lint/test tools against them.
//!
//! ## Commands
//!
//! - `ci:run <job> <phase>` (alias `run`): run the task set for a CI job phase
//! - `lint:yaml <path>` (hidden): lint a YAML path directly
//! - `fixture:create <template> <stability> <directory>` (hidden): scaffold
//!   the fixture codebase

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use fixci_ci::{render_status_table, CiPipeline, Task, TaskSetBuilder, YamlLintTask};
use fixci_core::{
    init_tracing, AppEnv, CodebaseCreator, CodebaseSpec, ComposerAdapter, FixciError, StatusCode,
};

#[derive(Parser)]
#[command(name = "fixci")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fixture-based CI orchestration for CMS module projects", long_about = None)]
struct Cli {
    /// Application environment name
    #[arg(short = 'e', long = "env", global = true, env = "FIXCI_ENV", default_value = "prod")]
    env: String,

    /// Disable verbose debug output
    #[arg(long, global = true, env = "FIXCI_NO_DEBUG")]
    no_debug: bool,

    /// Emit JSON-formatted log lines and reports
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the task set for a CI job phase against the fixture
    #[command(name = "ci:run", alias = "run")]
    CiRun {
        /// CI job name
        job: String,

        /// CI phase name
        phase: String,

        /// Fixture directory the tasks run against
        #[arg(long, env = "FIXCI_FIXTURE_DIR", default_value = "fixture")]
        fixture_dir: PathBuf,
    },

    /// Lint a YAML file or directory
    #[command(name = "lint:yaml", hide = true)]
    LintYaml {
        /// Path to lint
        path: String,
    },

    /// Scaffold the test fixture codebase
    #[command(name = "fixture:create", hide = true)]
    FixtureCreate {
        /// Composer project template, e.g. "vendor/project-template:^1"
        template: String,

        /// Minimum package stability (dev, alpha, beta, RC, stable)
        stability: String,

        /// Target directory for the fixture
        directory: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let app_env = AppEnv::new(cli.env.clone(), !cli.no_debug);
    init_tracing(cli.json, app_env.log_level());

    info!(env = %app_env.name, "fixci {}", fixci_core::VERSION);

    let status = match run(cli, &app_env).await {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {e:#}");
            e.downcast_ref::<FixciError>()
                .map(FixciError::status)
                .unwrap_or(StatusCode::Error)
        }
    };

    std::process::exit(status.code());
}

async fn run(cli: Cli, app_env: &AppEnv) -> Result<StatusCode> {
    match cli.command {
        Commands::CiRun {
            job,
            phase,
            fixture_dir,
        } => cmd_ci_run(&job, &phase, &fixture_dir, cli.json, app_env).await,
        Commands::LintYaml { path } => cmd_lint_yaml(&path).await,
        Commands::FixtureCreate {
            template,
            stability,
            directory,
        } => {
            let creator = CodebaseCreator::new(ComposerAdapter::from_path());
            cmd_fixture_create(&creator, &template, &stability, &directory).await
        }
    }
}

/// Run the task set for a CI job phase.
///
/// Unknown job/phase pairs resolve to the empty task set and report OK;
/// failures of resolved tasks yield the Error status.
async fn cmd_ci_run(
    job: &str,
    phase: &str,
    fixture_dir: &Path,
    json: bool,
    app_env: &AppEnv,
) -> Result<StatusCode> {
    let tasks = TaskSetBuilder::resolve(job, phase);

    info!(job, phase, tasks = tasks.len(), "resolved task set");

    let result = match CiPipeline::run(fixture_dir, tasks).await {
        Ok(result) => result,
        Err(e @ FixciError::FixtureNotReady { .. }) => {
            eprintln!();
            eprintln!("  The fixture has not been scaffolded yet.");
            eprintln!("  Run 'fixci fixture:create <template> <stability> {}' first.", fixture_dir.display());
            eprintln!();
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result.outcomes)?);
    } else {
        println!("{}", render_status_table(&result.outcomes));
        println!();
        println!(
            "Summary: {}/{} tasks passed ({}ms)",
            result.passed_count(),
            result.outcomes.len(),
            result.duration_ms
        );
        println!(
            "Status: {}",
            if result.success() { "✓ PASSED" } else { "✗ FAILED" }
        );
    }

    // In debug environments, echo the captured output of failing tools.
    if app_env.debug {
        for outcome in result.outcomes.iter().filter(|o| !o.succeeded()) {
            if !outcome.stdout.is_empty() {
                eprintln!("--- {} stdout ---\n{}", outcome.task, outcome.stdout);
            }
            if !outcome.stderr.is_empty() {
                eprintln!("--- {} stderr ---\n{}", outcome.task, outcome.stderr);
            }
        }
    }

    Ok(result.status())
}

/// Lint a YAML path directly, outside any fixture.
async fn cmd_lint_yaml(path: &str) -> Result<StatusCode> {
    let task = YamlLintTask::from_path().with_target(path);
    let outcome = task.execute(Path::new(".")).await?;

    print!("{}", outcome.stdout);

    if !outcome.succeeded() {
        eprint!("{}", outcome.stderr);
        return Err(FixciError::TaskFailed { task: outcome.task }.into());
    }

    Ok(StatusCode::Ok)
}

/// Scaffold the fixture codebase from a Composer template.
async fn cmd_fixture_create(
    creator: &CodebaseCreator,
    template: &str,
    stability: &str,
    directory: &str,
) -> Result<StatusCode> {
    let spec = CodebaseSpec::new(template, stability, directory);

    creator
        .create(&spec)
        .await
        .context(format!("Failed to scaffold fixture at '{directory}'"))?;

    println!("Fixture created at {directory}");

    Ok(StatusCode::Ok)
}
