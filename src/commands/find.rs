//! Find command implementation
//!
//! Walks the search directory and prints one line per discovered project.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::discovery::{discover, DiscoveryOptions, ProjectDescriptor};
use crate::utils::paths::display_path;

/// Find all Maven projects under the search directory
#[derive(Args, Debug)]
pub struct FindCommand {
    /// Emit the discovered projects as a JSON array instead of lines
    #[arg(long)]
    pub json: bool,
}

impl FindCommand {
    /// Execute the find command
    pub fn execute(self, root: &Path, options: &DiscoveryOptions, verbose: bool) -> Result<()> {
        let projects: Vec<ProjectDescriptor> = discover(root, options)?.collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&projects)?);
        } else {
            for project in &projects {
                println!("{}", display_path(root, &project.dir));
            }
        }

        if verbose {
            eprintln!("Found {} project(s) under {}", projects.len(), root.display());
        }

        Ok(())
    }
}
