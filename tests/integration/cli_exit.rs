use std::process::Command;

use anyhow::Result;

use crate::common::{fixture, BINARY_PATH};

#[test]
fn invalid_cleanup_config_exits_non_zero() -> Result<()> {
    let output = Command::new(BINARY_PATH)
        .arg("cleanup")
        .arg("--config")
        .arg(fixture("tests/fixtures/cleanup_invalid_lookup.toml"))
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cleanup.lookup"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn unknown_network_exits_non_zero() -> Result<()> {
    let output = Command::new(BINARY_PATH)
        .arg("cleanup")
        .arg("--config")
        .arg(fixture("tests/fixtures/cleanup_valid.toml"))
        .arg("--network")
        .arg("localnet")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown network `localnet`"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn erdpy_up_help_lists_installer_flags() -> Result<()> {
    let output = Command::new(BINARY_PATH)
        .args(["erdpy-up", "--help"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--modify-path",
        "--no-modify-path",
        "--elrondsdk-path",
        "--exact-version",
        "--from-branch",
    ] {
        assert!(stdout.contains(flag), "help should mention {flag}: {stdout}");
    }
    Ok(())
}
