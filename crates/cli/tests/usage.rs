//! Integration tests for the CLI argument contract.

use std::process::Command;

#[test]
fn test_missing_topic_prints_usage_and_exits_1() {
    let output = Command::new(env!("CARGO_BIN_EXE_autodeck"))
        .output()
        .expect("failed to spawn autodeck");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr was: {}", stderr);

    // No stage progress on stdout: the run stops before any pipeline work.
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_topic_performs_no_file_activity() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_autodeck"))
        .current_dir(dir.path())
        .output()
        .expect("failed to spawn autodeck");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
