//! Runner integration tests. These start real processes through `sh`.
#![cfg(unix)]

use fixture_cmd::{Args, CmdError, Runner, Watcher};
use std::time::Duration;
use tempfile::TempDir;

const WAIT: Duration = Duration::from_secs(5);

fn noisy_server() -> Args {
    Args::new([
        "sh",
        "-c",
        "echo 'output on stdout'; echo 'output on stderr' >&2; exec sleep 30",
    ])
}

#[tokio::test]
async fn test_start_signals_watchers() {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path());

    let werr = Watcher::stderr("output on stderr");
    let wout = Watcher::stdout("output on stdout");
    let wboth = Watcher::new("output on stdout");
    let cmd = runner
        .start(&noisy_server(), &[werr.clone(), wout.clone(), wboth.clone()])
        .unwrap();

    werr.wait(WAIT).await.unwrap();
    wout.wait(WAIT).await.unwrap();
    wboth.wait(WAIT).await.unwrap();

    let status = runner.stop(cmd, WAIT).await.unwrap();
    assert!(!status.success());
}

#[tokio::test]
async fn test_watcher_ignores_other_stream() {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path());

    let wrong = Watcher::stdout("output on stderr");
    let right = Watcher::stderr("output on stderr");
    let cmd = runner
        .start(&noisy_server(), &[wrong.clone(), right.clone()])
        .unwrap();

    right.wait(WAIT).await.unwrap();
    let err = wrong.wait(Duration::from_millis(200)).await.unwrap_err();
    assert!(matches!(err, CmdError::WaitTimeout { .. }));

    runner.stop(cmd, WAIT).await.unwrap();
}

#[tokio::test]
async fn test_run_captures_stdout_with_env() {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path()).env("FIXTURE_GREETING", "hello");

    let out = runner
        .run(&Args::new(["sh", "-c", "echo \"$FIXTURE_GREETING\""]))
        .await
        .unwrap();
    assert_eq!(out, "hello\n");
}

#[tokio::test]
async fn test_run_uses_working_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "").unwrap();
    let runner = Runner::new(dir.path());

    let out = runner.run(&Args::new(["ls"])).await.unwrap();
    assert_eq!(out.trim(), "marker.txt");
}

#[tokio::test]
async fn test_run_failure_reports_stderr() {
    let dir = TempDir::new().unwrap();
    let runner = Runner::new(dir.path());

    let err = runner
        .run(&Args::new(["sh", "-c", "echo boom >&2; exit 3"]))
        .await
        .unwrap_err();
    match err {
        CmdError::Failed { status, stderr, .. } => {
            assert_eq!(status.code(), Some(3));
            assert_eq!(stderr, "boom\n");
        }
        other => panic!("unexpected error: {other}"),
    }
}
