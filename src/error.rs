//! Error types and helpers for user-friendly error messages
//!
//! Every fatal condition maps to a single-line diagnostic plus an optional
//! actionable hint, and to a sysexits-style exit code so scripted callers
//! can distinguish failure kinds.

use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes, following the sysexits convention.
pub mod exit {
    /// Command line usage error
    pub const USAGE: i32 = 64;
    /// Input data was empty or unusable
    pub const DATAERR: i32 = 65;
    /// An input file or directory did not exist or was not readable
    pub const NOINPUT: i32 = 66;
    /// A required external tool is unavailable
    pub const UNAVAILABLE: i32 = 69;
    /// Internal software error
    pub const SOFTWARE: i32 = 70;
    /// An output file could not be created
    pub const CANTCREAT: i32 = 73;
}

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum MvnsetError {
    /// The discovery root is missing or unreadable
    #[error("Cannot search in '{}': {message}", path.display())]
    InaccessibleRoot { path: PathBuf, message: String },

    /// A descriptor already exists where the aggregator would go
    #[error("A project descriptor already exists at '{}'", path.display())]
    Conflict { path: PathBuf, hint: String },

    /// Discovery produced no projects to aggregate
    #[error("No projects found under '{}'", root.display())]
    EmptySet { root: PathBuf },

    /// Maven (or another required executable) is not on PATH
    #[error("Missing tool: {tool}")]
    MissingTool { tool: String, hint: String },

    /// A G:A:V coordinates string could not be parsed
    #[error("Not a valid G:A:V coordinates pattern: '{input}'")]
    Coordinates { input: String },
}

impl MvnsetError {
    /// Create an inaccessible-root error from an I/O failure
    pub fn inaccessible_root(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::InaccessibleRoot {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a conflict error with a remediation hint
    pub fn conflict(path: impl Into<PathBuf>, hint: impl Into<String>) -> Self {
        Self::Conflict {
            path: path.into(),
            hint: hint.into(),
        }
    }

    /// The exit code this failure kind maps to
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InaccessibleRoot { .. } => exit::NOINPUT,
            Self::Conflict { .. } => exit::CANTCREAT,
            Self::EmptySet { .. } => exit::DATAERR,
            Self::MissingTool { .. } => exit::UNAVAILABLE,
            Self::Coordinates { .. } => exit::USAGE,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("{} {}", style("ERROR:").red().bold(), self);

        match self {
            Self::Conflict { hint, .. } | Self::MissingTool { hint, .. } => {
                eprintln!("{} {}", style("HINT:").yellow().bold(), hint);
            }
            Self::EmptySet { .. } => {
                eprintln!(
                    "{} {}",
                    style("HINT:").yellow().bold(),
                    "Check --dir, --include and --prune: nothing matched."
                );
            }
            Self::Coordinates { .. } => {
                eprintln!(
                    "{} {}",
                    style("HINT:").yellow().bold(),
                    "Coordinates use G:A:V syntax; a part may be empty to take its default."
                );
            }
            Self::InaccessibleRoot { .. } => {}
        }
    }
}

/// Common error hints
pub mod hints {
    /// Hint for missing Maven
    pub fn maven() -> &'static str {
        "Install Maven from https://maven.apache.org/ or use your package manager:\n\
         • macOS: brew install maven\n\
         • Ubuntu: sudo apt install maven\n\
         • Windows: winget install Apache.Maven"
    }

    /// Hint for an existing descriptor at the aggregator location
    pub fn overwrite() -> &'static str {
        "Use --force to overwrite it, or choose a different --output/--dir."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_sysexits() {
        let err = MvnsetError::Coordinates {
            input: "a:b".to_string(),
        };
        assert_eq!(err.exit_code(), exit::USAGE);

        let err = MvnsetError::EmptySet {
            root: PathBuf::from("."),
        };
        assert_eq!(err.exit_code(), exit::DATAERR);

        let err = MvnsetError::conflict("pom.xml", hints::overwrite());
        assert_eq!(err.exit_code(), exit::CANTCREAT);

        let err = MvnsetError::MissingTool {
            tool: "mvn".to_string(),
            hint: hints::maven().to_string(),
        };
        assert_eq!(err.exit_code(), exit::UNAVAILABLE);
    }

    #[test]
    fn conflict_message_names_the_path() {
        let err = MvnsetError::conflict("/tmp/pom.xml", hints::overwrite());
        assert!(err.to_string().contains("/tmp/pom.xml"));
    }
}
