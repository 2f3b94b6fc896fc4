//! External command execution
//!
//! Every call to `gh` and `git` goes through [`CommandRunner`] so the prune
//! flow can be driven by a scripted runner in tests.

use std::process::Command;

/// Outcome of one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
  /// Whether the process ran and exited zero
  pub success: bool,
  /// Trimmed stdout on success, trimmed stderr (or spawn error) on failure
  pub output: String,
}

impl CommandOutput {
  pub fn ok(output: impl Into<String>) -> Self {
    Self {
      success: true,
      output: output.into(),
    }
  }

  pub fn failed(output: impl Into<String>) -> Self {
    Self {
      success: false,
      output: output.into(),
    }
  }
}

/// Runs a program with arguments and reports `{success, output}`
pub trait CommandRunner {
  fn run(&self, program: &str, args: &[&str]) -> CommandOutput;
}

/// Runner backed by real child processes
///
/// Inherits the caller's environment (gh needs its auth config and git its
/// credentials) and sets no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, program: &str, args: &[&str]) -> CommandOutput {
    match Command::new(program).args(args).output() {
      Ok(output) if output.status.success() => {
        CommandOutput::ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
      }
      Ok(output) => CommandOutput::failed(String::from_utf8_lossy(&output.stderr).trim().to_string()),
      Err(e) => CommandOutput::failed(format!("Failed to execute {}: {}", program, e)),
    }
  }
}
