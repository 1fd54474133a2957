//! Glob-based name filtering for discovery

use anyhow::{Context, Result};
use glob::Pattern;

/// Include/exclude filter over directory basenames.
///
/// A name passes when it matches at least one include pattern (an empty
/// include set matches everything) and matches no exclude pattern.
#[derive(Debug, Clone, Default)]
pub struct GlobFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl GlobFilter {
    /// Compile a filter from raw glob strings
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Test whether a name passes the filter
    pub fn matches(&self, name: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|p| p.matches(name));
        included && !self.exclude.iter().any(|p| p.matches(name))
    }
}

/// Match a name against a pattern list, with a default for the empty list
pub fn matches_any(name: &str, patterns: &[Pattern], default: bool) -> bool {
    if patterns.is_empty() {
        return default;
    }
    patterns.iter().any(|p| p.matches(name))
}

/// Compile a list of glob strings into patterns
pub fn compile(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: {}", p)))
        .collect()
}
