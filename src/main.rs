//! mvnset CLI - a helper for maintaining Maven project sets
//!
//! Wraps common chores around large collections of loosely related Maven
//! projects: discovering `pom.xml` descriptors, generating an aggregator
//! (reactor) POM over all of them, and delegating property printing and
//! artifact signing to Maven itself.
//!
//! ## Architecture
//!
//! ```text
//! Rust CLI → discovery/pom modules → mvn (direct, for print/sign)
//! ```

mod cli;
mod commands;
mod discovery;
mod error;
mod exec;
mod pom;
mod utils;

use clap::Parser;

use cli::Cli;
use error::MvnsetError;
use utils::terminal::print_error;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        // Domain errors carry their own diagnostics and sysexits-style
        // exit codes; anything else is a plain software failure.
        match err.downcast_ref::<MvnsetError>() {
            Some(domain) => {
                domain.display_with_hints();
                std::process::exit(domain.exit_code());
            }
            None => {
                print_error(&format!("{err:#}"));
                std::process::exit(error::exit::SOFTWARE);
            }
        }
    }
}
