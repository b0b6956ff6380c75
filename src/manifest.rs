//! Package manifest reading
//!
//! Builds the path to an installed package's `package.json` and parses the
//! one field the resolver consumes.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The subset of `package.json` the resolver consumes.
///
/// The manifest is external data owned by the npm ecosystem; every field
/// other than `version` is ignored, and `version` is returned exactly as the
/// manifest holds it.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub version: Option<String>,
}

/// Path to an installed package's manifest under a project root.
///
/// Scoped names like `@types/node` contain a path separator and resolve to
/// the nested directory through the join.
pub fn manifest_path(project_root: &Path, package: &str) -> PathBuf {
    project_root
        .join("node_modules")
        .join(package)
        .join("package.json")
}

/// Read and parse a package manifest.
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
