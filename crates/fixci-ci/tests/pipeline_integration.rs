//! Integration tests for the CI pipeline with stub tool binaries.

use fixci_ci::{
    CiPipeline, Classification, PhpLintTask, StaticAnalysisTask, Task, YamlLintTask,
};
use std::path::{Path, PathBuf};

/// Write an executable shell script standing in for an external tool.
fn write_stub(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).expect("write stub");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod stub");
    path
}

/// Scaffold a minimal ready fixture directory.
fn ready_fixture() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::write(tmp.path().join("composer.json"), "{}").expect("write composer.json");
    tmp
}

/// Test: a lint tool exiting with its "no files found" code passes the run.
#[tokio::test]
async fn test_benign_exit_code_is_success() {
    let fixture = ready_fixture();
    let stub = write_stub(fixture.path(), "parallel-lint", "exit 254");

    let tasks: Vec<Box<dyn Task>> =
        vec![Box::new(PhpLintTask::new(stub.to_str().unwrap()))];

    let result = CiPipeline::run(fixture.path(), tasks)
        .await
        .expect("pipeline failed");

    assert!(result.success(), "254 from parallel-lint should pass");
    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.outcomes[0].exit_code, 254);
    assert_eq!(result.outcomes[0].classification, Classification::Benign);
}

/// Test: a real lint failure (syntax error, exit 1) fails the run.
#[tokio::test]
async fn test_lint_failure_is_failure() {
    let fixture = ready_fixture();
    let stub = write_stub(fixture.path(), "parallel-lint", "echo 'Parse error'; exit 1");

    let tasks: Vec<Box<dyn Task>> =
        vec![Box::new(PhpLintTask::new(stub.to_str().unwrap()))];

    let result = CiPipeline::run(fixture.path(), tasks)
        .await
        .expect("pipeline failed");

    assert!(!result.success());
    assert_eq!(result.outcomes[0].classification, Classification::Failed);
    assert_eq!(result.outcomes[0].exit_code, 1);
    assert!(result.outcomes[0].stdout.contains("Parse error"));
}

/// Test: 254 is only benign where the tool documents it.
#[tokio::test]
async fn test_benign_code_is_per_task_not_global() {
    let fixture = ready_fixture();
    let stub = write_stub(fixture.path(), "phpstan", "exit 254");

    let tasks: Vec<Box<dyn Task>> =
        vec![Box::new(StaticAnalysisTask::new(stub.to_str().unwrap()))];

    let result = CiPipeline::run(fixture.path(), tasks)
        .await
        .expect("pipeline failed");

    assert!(
        !result.success(),
        "254 is not benign for the static analysis task"
    );
    assert_eq!(result.outcomes[0].classification, Classification::Failed);
}

/// Test: tasks run strictly one after another, in order.
#[tokio::test]
async fn test_tasks_run_sequentially_in_order() {
    let fixture = ready_fixture();
    let log = fixture.path().join("order.log");
    let first = write_stub(
        fixture.path(),
        "first-tool",
        &format!("echo first >> {}", log.display()),
    );
    let second = write_stub(
        fixture.path(),
        "second-tool",
        &format!("echo second >> {}", log.display()),
    );

    let tasks: Vec<Box<dyn Task>> = vec![
        Box::new(PhpLintTask::new(first.to_str().unwrap())),
        Box::new(YamlLintTask::new(second.to_str().unwrap())),
    ];

    let result = CiPipeline::run(fixture.path(), tasks)
        .await
        .expect("pipeline failed");

    assert!(result.success());
    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.outcomes[0].task, "php_lint");
    assert_eq!(result.outcomes[1].task, "yaml_lint");

    let recorded = std::fs::read_to_string(&log).expect("order log");
    assert_eq!(recorded, "first\nsecond\n");
}

/// Test: a task whose binary cannot spawn is recorded with exit -1 and the
/// pipeline continues to the remaining tasks.
#[tokio::test]
async fn test_spawn_failure_recorded_and_pipeline_continues() {
    let fixture = ready_fixture();
    let ok_stub = write_stub(fixture.path(), "yaml-lint", "exit 0");

    let tasks: Vec<Box<dyn Task>> = vec![
        Box::new(PhpLintTask::new("/nonexistent-binary-that-does-not-exist")),
        Box::new(YamlLintTask::new(ok_stub.to_str().unwrap())),
    ];

    let result = CiPipeline::run(fixture.path(), tasks)
        .await
        .expect("pipeline failed");

    assert!(!result.success());
    assert_eq!(result.outcomes.len(), 2, "second task should still run");
    assert_eq!(result.outcomes[0].exit_code, -1);
    assert_eq!(result.outcomes[0].classification, Classification::Failed);
    assert!(result.outcomes[1].succeeded());
}

/// Test: running tasks against an unscaffolded directory is refused.
#[tokio::test]
async fn test_unscaffolded_fixture_is_refused() {
    let tmp = tempfile::tempdir().expect("tempdir");
    // Directory exists but was never scaffolded (no composer.json).
    let stub = write_stub(tmp.path(), "parallel-lint", "exit 0");

    let tasks: Vec<Box<dyn Task>> =
        vec![Box::new(PhpLintTask::new(stub.to_str().unwrap()))];

    let err = CiPipeline::run(tmp.path(), tasks).await.unwrap_err();
    assert!(matches!(
        err,
        fixci_core::FixciError::FixtureNotReady { .. }
    ));
}

/// Test: outcome rows serialize to JSON for log aggregation.
#[tokio::test]
async fn test_outcomes_serialize_to_json() {
    let fixture = ready_fixture();
    let stub = write_stub(fixture.path(), "parallel-lint", "exit 0");

    let tasks: Vec<Box<dyn Task>> =
        vec![Box::new(PhpLintTask::new(stub.to_str().unwrap()))];

    let result = CiPipeline::run(fixture.path(), tasks)
        .await
        .expect("pipeline failed");

    let json = serde_json::to_value(&result.outcomes).expect("serialize outcomes");
    assert_eq!(json[0]["task"], "php_lint");
    assert_eq!(json[0]["classification"], "passed");
    assert_eq!(json[0]["exit_code"], 0);
}
