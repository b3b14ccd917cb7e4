// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a shell script that stands in for a test executable.
///
/// The script prints `ARG:<value>` for every argument it receives, reports
/// whether `$EXPECT_DIR` exists when it starts, then exits with `exit_code`.
#[cfg(unix)]
pub fn fake_test_executable(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = format!(
        r#"#!/bin/sh
for arg in "$@"; do
    printf 'ARG:%s\n' "$arg"
done
if [ -n "$EXPECT_DIR" ] && [ -d "$EXPECT_DIR" ]; then
    echo "DIR_EXISTS"
fi
exit {exit_code}
"#
    );
    fs::write(&path, script).expect("Failed to write fake test executable");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake test executable runnable");
    path
}

/// The launcher binary with the settings variables cleared, so the host
/// environment cannot leak into a test. No language is chosen.
pub fn launcher_without_lang() -> Command {
    let mut cmd = Command::cargo_bin("catch-launcher").unwrap();
    cmd.env_remove("CATCH_REPORTER")
        .env_remove("CATCH_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Like `launcher_without_lang`, with English messages.
pub fn launcher() -> Command {
    let mut cmd = launcher_without_lang();
    cmd.arg("--lang").arg("en");
    cmd
}

/// Writes a launcher config file with the given TOML content.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("launcher.toml");
    fs::write(&path, content).unwrap();
    path
}
