//! Print command implementation
//!
//! Prints interpolated build properties. Property resolution stays with
//! Maven's own interpolation engine; this command only assembles
//! `help:evaluate` invocations and relays their output.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::exec::maven::Maven;
use crate::utils::terminal::create_spinner;

/// Print interpolated Maven build properties
#[derive(Args, Debug)]
pub struct PrintCommand {
    /// Property expressions to evaluate (e.g. project.version)
    #[arg(required = true)]
    pub expressions: Vec<String>,

    /// POM file to evaluate against (default: ./pom.xml)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

impl PrintCommand {
    /// Execute the print command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let maven = Maven::locate()?;

        for expression in &self.expressions {
            let spinner = create_spinner(&format!("Evaluating {}", expression));
            let value = maven.evaluate(expression, self.file.as_deref(), verbose);
            spinner.finish_and_clear();

            println!("{}", value?);
        }

        Ok(())
    }
}
