//! Sign command implementation
//!
//! Signs release artifacts by delegating to the Maven GPG plugin. stdio is
//! inherited so the gpg agent can prompt for the passphrase; no credential
//! ever passes through this tool.

use anyhow::Result;
use clap::Args;

use crate::exec::maven::Maven;

/// Sign release artifacts via the Maven GPG plugin
#[derive(Args, Debug)]
pub struct SignCommand {
    /// GPG key to sign with (passed as -Dgpg.keyname)
    #[arg(short, long)]
    pub keyname: Option<String>,

    /// Maven goals and extra arguments to invoke
    #[arg(num_args = 0.., default_values_t = [String::from("verify"), String::from("gpg:sign")])]
    pub goals: Vec<String>,
}

impl SignCommand {
    /// Execute the sign command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let maven = Maven::locate()?;

        let mut args = Vec::new();
        if let Some(keyname) = &self.keyname {
            args.push(format!("-Dgpg.keyname={}", keyname));
        }
        args.extend(self.goals.iter().cloned());

        let result = maven.run_interactive(&args, verbose)?;
        if !result.success {
            // Maven already printed its own diagnostics on inherited stderr.
            std::process::exit(result.exit_code);
        }

        Ok(())
    }
}
