//! Subprocess execution helpers

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Captured standard output (empty when stdio is inherited)
    pub stdout: String,

    /// Captured standard error (empty when stdio is inherited)
    pub stderr: String,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            stdout,
            stderr,
            duration,
        }
    }
}

/// Run a command, either inheriting stdio (interactive tools, e.g. a gpg
/// agent pinentry) or capturing it.
pub fn run_command(
    program: &str,
    args: &[String],
    cwd: Option<&Path>,
    inherit_io: bool,
) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    if inherit_io {
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute {}", program))?;

        Ok(CommandResult::from_status(
            status,
            String::new(),
            String::new(),
            start.elapsed(),
        ))
    } else {
        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute {}", program))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        Ok(CommandResult::from_status(
            output.status,
            stdout,
            stderr,
            start.elapsed(),
        ))
    }
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
