use std::fs;
use std::process::Command;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_s3-hash-upload"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_config_fails_with_one_diagnostic_line() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");
    fs::write(&file, b"payload").unwrap();

    let output = bin().arg(&file).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "stderr was: {:?}", stderr);
    assert!(lines[0].contains("cannot read config file"));
}

#[test]
fn no_arguments_prints_usage() {
    let output = bin().output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage:"));
}
