//! Project root discovery
//!
//! Provides utilities for locating the nearest `node_modules` by walking up
//! the directory tree.

use std::path::{Path, PathBuf};

/// Find the project root by walking up from the current directory.
///
/// The project root is the nearest directory that directly contains an entry
/// named `node_modules`.
pub fn find_project_root_from_cwd() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_project_root(&cwd)
}

/// Find the project root by walking up from a start directory.
///
/// The start directory itself is checked before any of its ancestors.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join("node_modules").exists() {
            return Some(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    None
}
