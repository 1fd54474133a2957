//! Maven POM model: GAV coordinates and aggregator generation

mod aggregator;

pub use aggregator::Aggregator;

use std::fmt;
use std::str::FromStr;

use crate::error::MvnsetError;

/// Built-in fallback coordinates for a generated aggregator
pub const DEFAULT_GROUP_ID: &str = "localhost";
pub const DEFAULT_ARTIFACT_ID: &str = "build";
pub const DEFAULT_VERSION: &str = "1.0.0-SNAPSHOT";

/// Maven GAV coordinates (groupId, artifactId, version)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            group_id: DEFAULT_GROUP_ID.to_string(),
            artifact_id: DEFAULT_ARTIFACT_ID.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl FromStr for Coordinates {
    type Err = MvnsetError;

    /// Parse a `G:A:V` string. An empty part takes its built-in default,
    /// so `::` yields the default coordinates entirely.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 3 {
            return Err(MvnsetError::Coordinates {
                input: input.to_string(),
            });
        }

        let defaults = Self::default();
        let pick = |part: &str, default: String| {
            if part.is_empty() {
                default
            } else {
                part.to_string()
            }
        };

        Ok(Self {
            group_id: pick(parts[0], defaults.group_id),
            artifact_id: pick(parts[1], defaults.artifact_id),
            version: pick(parts[2], defaults.version),
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
