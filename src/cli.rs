//! CLI argument parsing using clap derive macros

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    find::FindCommand, make::MakeCommand, print::PrintCommand, sign::SignCommand,
};
use crate::discovery::DiscoveryOptions;

/// mvnset - Maven project-set helper
///
/// Helps maintaining large sets of loosely related Maven projects.
#[derive(Parser, Debug)]
#[command(name = "mvnset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The directory where to search for the projects
    #[arg(short = 'd', long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Glob pattern for project directory names to include (repeatable)
    #[arg(short = 'i', long = "include", global = true, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Glob pattern for project directory names to exclude (repeatable)
    #[arg(short = 'x', long = "exclude", global = true, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Additional directory-name pattern to avoid searching in
    /// (repeatable, extends the built-in prune list)
    #[arg(short = 'p', long = "prune", global = true, value_name = "GLOB")]
    pub prune: Vec<String>,

    /// Consider --dir itself as a possible project; otherwise the search
    /// directory is always skipped
    #[arg(short = 'w', long, global = true)]
    pub with_root: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find all Maven projects under the search directory
    Find(FindCommand),

    /// Make an aggregator POM for all found projects
    Make(MakeCommand),

    /// Print interpolated Maven build properties
    Print(PrintCommand),

    /// Sign release artifacts via the Maven GPG plugin
    Sign(SignCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let mut options = DiscoveryOptions {
            include: self.include,
            exclude: self.exclude,
            with_root: self.with_root,
            ..Default::default()
        };
        options.prune.extend(self.prune);

        // Execute the subcommand
        match self.command {
            Commands::Find(cmd) => cmd.execute(&self.dir, &options, self.verbose),
            Commands::Make(cmd) => cmd.execute(&self.dir, &options, self.verbose),
            Commands::Print(cmd) => cmd.execute(self.verbose),
            Commands::Sign(cmd) => cmd.execute(self.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_find_with_globals() {
        let cli = Cli::parse_from([
            "mvnset", "-d", "/work", "-i", "lib-*", "-x", "legacy", "-p", "node_modules",
            "find",
        ]);
        assert_eq!(cli.dir, PathBuf::from("/work"));
        assert_eq!(cli.include, vec!["lib-*".to_string()]);
        assert_eq!(cli.exclude, vec!["legacy".to_string()]);
        assert_eq!(cli.prune, vec!["node_modules".to_string()]);
        assert!(matches!(cli.command, Commands::Find(_)));
    }

    #[test]
    fn parses_make_options() {
        let cli = Cli::parse_from([
            "mvnset", "make", "-c", "com.example:all:1.0", "-n", "All", "-o", "reactor.xml",
            "--force",
        ]);
        match cli.command {
            Commands::Make(cmd) => {
                assert_eq!(cmd.coordinates, "com.example:all:1.0");
                assert_eq!(cmd.name.as_deref(), Some("All"));
                assert_eq!(cmd.output, PathBuf::from("reactor.xml"));
                assert!(cmd.force);
                assert!(!cmd.read);
            }
            _ => panic!("Expected make"),
        }
    }

    #[test]
    fn make_defaults_to_pom_xml_output() {
        let cli = Cli::parse_from(["mvnset", "make"]);
        match cli.command {
            Commands::Make(cmd) => {
                assert_eq!(cmd.coordinates, "::");
                assert_eq!(cmd.output, PathBuf::from("pom.xml"));
            }
            _ => panic!("Expected make"),
        }
    }

    #[test]
    fn dir_defaults_to_current_directory() {
        let cli = Cli::parse_from(["mvnset", "find"]);
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(!cli.with_root);
    }

    #[test]
    fn print_requires_an_expression() {
        assert!(Cli::try_parse_from(["mvnset", "print"]).is_err());
        let cli = Cli::parse_from(["mvnset", "print", "project.version"]);
        match cli.command {
            Commands::Print(cmd) => {
                assert_eq!(cmd.expressions, vec!["project.version".to_string()]);
            }
            _ => panic!("Expected print"),
        }
    }

    #[test]
    fn sign_defaults_to_gpg_sign_goals() {
        let cli = Cli::parse_from(["mvnset", "sign"]);
        match cli.command {
            Commands::Sign(cmd) => {
                assert_eq!(
                    cmd.goals,
                    vec!["verify".to_string(), "gpg:sign".to_string()]
                );
                assert!(cmd.keyname.is_none());
            }
            _ => panic!("Expected sign"),
        }
    }
}
