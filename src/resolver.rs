//! Installed package version resolution
//!
//! Walks up from a start directory to the nearest `node_modules`, then reads
//! the named package's manifest to extract its version.

use crate::manifest::{self, ManifestError};
use crate::walk;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No node_modules found in {start} or any parent directory")]
    NoProjectRoot { start: PathBuf },

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// A completed lookup.
#[derive(Debug)]
pub struct Resolution {
    pub project_root: PathBuf,
    pub manifest_path: PathBuf,
    /// Whatever the manifest's `version` field holds; `None` when the key is
    /// absent. Absence is not a failure.
    pub version: Option<String>,
}

/// Resolve an installed package, searching upward from `start`.
pub fn resolve(package: &str, start: &Path) -> Result<Resolution, ResolveError> {
    let project_root =
        walk::find_project_root(start).ok_or_else(|| ResolveError::NoProjectRoot {
            start: start.to_path_buf(),
        })?;

    let manifest_path = manifest::manifest_path(&project_root, package);
    let manifest = manifest::read_manifest(&manifest_path)?;

    Ok(Resolution {
        project_root,
        manifest_path,
        version: manifest.version,
    })
}

/// Resolve the installed version of a package, searching upward from `start`.
///
/// `package` is expected to be non-empty; scoped names like `@types/node`
/// are supported.
pub fn package_version_from(package: &str, start: &Path) -> Result<Option<String>, ResolveError> {
    resolve(package, start).map(|r| r.version)
}

/// Resolve the installed version of a package, searching upward from the
/// current directory.
pub fn package_version(package: &str) -> Result<Option<String>, ResolveError> {
    let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    package_version_from(package, &start)
}
