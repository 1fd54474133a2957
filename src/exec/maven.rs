//! Maven invocation
//!
//! mvnset never reimplements Maven behavior: property interpolation and
//! artifact signing are delegated to `mvn` through its normal CLI.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::error::{hints, MvnsetError};

use super::subprocess::{command_exists, run_command, CommandResult};

/// Handle to the Maven executable found on PATH
pub struct Maven {
    mvn_path: String,
}

impl Maven {
    /// Locate `mvn`
    pub fn locate() -> Result<Self> {
        if !command_exists("mvn") {
            return Err(MvnsetError::MissingTool {
                tool: "mvn".to_string(),
                hint: hints::maven().to_string(),
            }
            .into());
        }
        Ok(Self {
            mvn_path: "mvn".to_string(),
        })
    }

    /// Evaluate one interpolated build property via `mvn help:evaluate`.
    ///
    /// Runs quietly with `-DforceStdout` so the captured stdout is exactly
    /// the property value.
    pub fn evaluate(
        &self,
        expression: &str,
        pom: Option<&Path>,
        verbose: bool,
    ) -> Result<String> {
        let mut args = vec![
            "--batch-mode".to_string(),
            "--quiet".to_string(),
            "help:evaluate".to_string(),
            format!("-Dexpression={}", expression),
            "-DforceStdout".to_string(),
        ];
        if let Some(pom) = pom {
            args.push("--file".to_string());
            args.push(pom.display().to_string());
        }

        let result = self.run_captured(&args, verbose)?;
        if verbose {
            eprintln!("mvn finished in {:.1}s", result.duration.as_secs_f32());
        }
        if !result.success {
            bail!(
                "mvn help:evaluate failed for '{}' (exit code {}):\n{}",
                expression,
                result.exit_code,
                result.stderr.trim()
            );
        }

        Ok(result.stdout.trim_end().to_string())
    }

    /// Run `mvn` with inherited stdio, for goals that may prompt (gpg
    /// pinentry, interactive plugins).
    pub fn run_interactive(&self, args: &[String], verbose: bool) -> Result<CommandResult> {
        if verbose {
            eprintln!("Executing: {} {}", self.mvn_path, args.join(" "));
        }
        run_command(&self.mvn_path, args, None, true)
            .context("Failed to execute mvn")
    }

    fn run_captured(&self, args: &[String], verbose: bool) -> Result<CommandResult> {
        if verbose {
            eprintln!("Executing: {} {}", self.mvn_path, args.join(" "));
        }
        run_command(&self.mvn_path, args, None, false)
            .context("Failed to execute mvn")
    }
}
