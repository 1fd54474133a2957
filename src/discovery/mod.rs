//! Project discovery: walking a directory tree for Maven descriptors
//!
//! Traversal is depth-first with children visited in lexicographic name
//! order, so repeated runs over an unmodified tree yield the identical
//! sequence. Directories whose name matches a prune pattern are never
//! descended into; include/exclude filters suppress only the yield, not
//! the descent, so nested projects under a filtered directory are still
//! found.

mod filter;

pub use filter::GlobFilter;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use glob::Pattern;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::MvnsetError;
use crate::utils::terminal::print_warning;

/// Directory names that are never worth searching in
pub const DEFAULT_PRUNE: &[&str] = &[".git", ".svn", "bin", "doc", "src", "target"];

/// The descriptor filename Maven understands
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// A discovered buildable unit: a directory holding a project descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    /// Project directory
    pub dir: PathBuf,

    /// Path to the descriptor file inside `dir`
    pub descriptor: PathBuf,
}

/// Explicit discovery configuration.
///
/// Everything the walk depends on is carried here rather than read from
/// ambient process state.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Recognized descriptor filename
    pub descriptor_file: String,

    /// Directory-name patterns to avoid descending into
    pub prune: Vec<String>,

    /// Glob patterns a project directory name must match to be yielded
    pub include: Vec<String>,

    /// Glob patterns a project directory name must not match
    pub exclude: Vec<String>,

    /// Whether the root directory itself may count as a project
    pub with_root: bool,

    /// Whether to follow symbolic links during traversal
    pub follow_links: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            descriptor_file: DESCRIPTOR_FILE.to_string(),
            prune: DEFAULT_PRUNE.iter().map(|s| (*s).to_string()).collect(),
            include: Vec::new(),
            exclude: Vec::new(),
            with_root: false,
            follow_links: true,
        }
    }
}

/// Start a discovery walk under `root`.
///
/// Fails up front with [`MvnsetError::InaccessibleRoot`] when the root is
/// missing or unreadable; traversal errors below the root are reported as
/// warnings and skipped.
pub fn discover(root: &Path, options: &DiscoveryOptions) -> Result<Discovery> {
    // Probe readability before handing out a lazy walker, so callers get
    // a fatal error instead of an empty sequence for a bad root.
    if let Err(err) = std::fs::read_dir(root) {
        return Err(MvnsetError::inaccessible_root(root, &err).into());
    }

    let prune = filter::compile(&options.prune)?;
    let name_filter = GlobFilter::new(&options.include, &options.exclude)?;

    Ok(Discovery {
        descriptor_file: options.descriptor_file.clone(),
        with_root: options.with_root,
        prune,
        name_filter,
        walker: WalkDir::new(root)
            .follow_links(options.follow_links)
            .sort_by_file_name()
            .into_iter(),
        seen: HashSet::new(),
    })
}

/// Lazy sequence of discovered projects, in traversal order
pub struct Discovery {
    descriptor_file: String,
    with_root: bool,
    prune: Vec<Pattern>,
    name_filter: GlobFilter,
    walker: walkdir::IntoIter,
    seen: HashSet<PathBuf>,
}

impl Iterator for Discovery {
    type Item = ProjectDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    print_warning(&err.to_string());
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();

            // Prune by directory name; the root itself is never pruned.
            if entry.depth() > 0 && filter::matches_any(&name, &self.prune, false) {
                self.walker.skip_current_dir();
                continue;
            }

            let dir = entry.path();
            let descriptor = dir.join(&self.descriptor_file);
            if !descriptor.is_file() {
                continue;
            }

            if entry.depth() == 0 && !self.with_root {
                continue;
            }

            if !self.name_filter.matches(&name) {
                continue;
            }

            // Deduplicate by canonical path; first occurrence wins.
            let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
            if !self.seen.insert(canonical) {
                continue;
            }

            return Some(ProjectDescriptor {
                dir: dir.to_path_buf(),
                descriptor,
            });
        }
    }
}
