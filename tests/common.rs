// tests/common.rs

use assert_cmd::Command;

// Helper to get the binary, already in headless mode so the path is read from stdin.
#[allow(dead_code)] // Not every integration test uses it.
pub fn inspector_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("file-inspector"));
    cmd.arg("--headless");
    cmd
}
