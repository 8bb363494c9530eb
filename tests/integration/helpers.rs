//! Shared helpers for CLI integration tests.

use std::process::Command;

/// Run the folio CLI and capture output.
pub fn run_folio(args: &[&str]) -> (String, String, i32) {
    run_folio_with_env(args, &[])
}

/// Run the folio CLI with extra environment variables.
pub fn run_folio_with_env(args: &[&str], env: &[(&str, &str)]) -> (String, String, i32) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_folio"));
    command.args(args);
    for (key, value) in env {
        command.env(key, value);
    }
    let output = command.output().expect("Failed to execute folio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
