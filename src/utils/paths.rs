//! Path utilities for the mvnset CLI

use std::path::{Component, Path};

/// Convert a path to Unix format with forward slashes.
///
/// Maven module entries and the `find` output always use `/`, regardless
/// of the host separator.
pub fn to_unix(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|component| match component {
            Component::RootDir => String::new(),
            other => other.as_os_str().to_string_lossy().into_owned(),
        })
        .collect();
    parts.join("/")
}

/// Render a project directory for display, relative to `root` when
/// possible and prefixed with `./` the way shell tooling expects.
pub fn display_path(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => format!("./{}", to_unix(relative)),
        Err(_) => to_unix(dir),
    }
}
