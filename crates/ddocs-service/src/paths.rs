//! Project-relative path resolution
//!
//! Callers address documents relative to the project root. Anything that
//! could land outside the root is rejected before the filesystem is touched.

use crate::error::{ServiceError, ServiceResult};
use std::path::{Component, Path, PathBuf};

/// Resolve `requested` under `root`
///
/// # Errors
/// `ServiceError::InvalidPath` for empty, absolute, or `..`-bearing paths.
pub fn resolve(root: &Path, requested: &str) -> ServiceResult<PathBuf> {
    if requested.trim().is_empty() {
        return Err(ServiceError::invalid_path(requested, "empty path"));
    }

    let rel = Path::new(requested);
    for component in rel.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(ServiceError::invalid_path(requested, "parent directory reference"));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ServiceError::invalid_path(requested, "absolute path"));
            }
        }
    }

    Ok(root.join(rel))
}
