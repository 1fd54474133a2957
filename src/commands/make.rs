//! Make command implementation
//!
//! Generates an aggregator (reactor) POM listing every discovered project
//! as a module. The POM is built completely in memory before anything is
//! written, so a failure never leaves a partial descriptor behind.

use std::fs::OpenOptions;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::discovery::{discover, DiscoveryOptions, GlobFilter, ProjectDescriptor};
use crate::error::{hints, MvnsetError};
use crate::pom::{Aggregator, Coordinates};
use crate::utils::terminal::print_success;

/// Make an aggregator POM for all found projects
#[derive(Args, Debug)]
pub struct MakeCommand {
    /// GAV coordinates of the generated POM, in G:A:V syntax; an empty
    /// part takes its built-in default
    #[arg(short = 'c', long, default_value = "::")]
    pub coordinates: String,

    /// Name element of the generated POM
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Target file to store the result in
    #[arg(short = 'o', long, default_value = "pom.xml")]
    pub output: PathBuf,

    /// Overwrite an existing descriptor
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Read the module list from stdin instead of discovering it; the
    /// include and exclude filters still apply
    #[arg(short = 'r', long)]
    pub read: bool,

    /// Write the POM to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,
}

impl MakeCommand {
    /// Execute the make command
    pub fn execute(self, root: &Path, options: &DiscoveryOptions, verbose: bool) -> Result<()> {
        let coordinates: Coordinates = self.coordinates.parse::<Coordinates>()?;

        let aggregator = if self.read {
            let filter = GlobFilter::new(&options.include, &options.exclude)?;
            let modules = read_modules(io::stdin().lock(), &filter)?;
            Aggregator::from_modules(modules, root, coordinates, self.name)?
        } else {
            let discovered: Vec<ProjectDescriptor> = discover(root, options)?.collect();
            Aggregator::from_discovered(
                &discovered,
                root,
                &options.descriptor_file,
                coordinates,
                self.name,
                self.force,
            )?
        };

        let xml = aggregator.to_xml()?;

        if self.stdout {
            print!("{xml}");
            io::stdout().flush()?;
            return Ok(());
        }

        write_all_or_nothing(&self.output, &xml, self.force)?;

        if verbose {
            print_success(&format!(
                "wrote aggregator with {} module(s) to {}",
                aggregator.modules().len(),
                self.output.display()
            ));
        }

        Ok(())
    }
}

/// Read a module list, one path per line, applying the name filter to the
/// basename of each entry
fn read_modules(reader: impl BufRead, filter: &GlobFilter) -> Result<Vec<String>> {
    let mut modules = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read module list from stdin")?;
        let module = line.trim();
        if module.is_empty() {
            continue;
        }

        let basename = Path::new(module)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| module.to_string());
        if filter.matches(&basename) {
            modules.push(module.to_string());
        }
    }
    Ok(modules)
}

/// Write the generated POM, refusing to clobber an existing file unless
/// forced
fn write_all_or_nothing(output: &Path, xml: &str, force: bool) -> Result<()> {
    let mut open = OpenOptions::new();
    open.write(true);
    if force {
        open.create(true).truncate(true);
    } else {
        open.create_new(true);
    }

    let mut file = match open.open(output) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            return Err(MvnsetError::conflict(output, hints::overwrite()).into());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to create {}", output.display()));
        }
    };

    file.write_all(xml.as_bytes())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_modules_trims_and_filters_by_basename() {
        let filter = GlobFilter::new(&[], &["legacy*".to_string()]).unwrap();
        let input = "a\n  b/c  \n\nlibs/legacy-io\n";

        let modules = read_modules(input.as_bytes(), &filter).unwrap();
        assert_eq!(modules, vec!["a".to_string(), "b/c".to_string()]);
    }

    #[test]
    fn write_refuses_to_clobber_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("pom.xml");
        fs::write(&target, "original").unwrap();

        let err = write_all_or_nothing(&target, "<project/>", false).unwrap_err();
        let domain = err.downcast_ref::<MvnsetError>().unwrap();
        assert!(matches!(domain, MvnsetError::Conflict { .. }));
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");

        write_all_or_nothing(&target, "<project/>", true).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "<project/>");
    }

    #[test]
    fn write_creates_a_fresh_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.xml");

        write_all_or_nothing(&target, "<project/>", false).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "<project/>");
    }
}
