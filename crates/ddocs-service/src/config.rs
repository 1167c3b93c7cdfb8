//! Service configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the project root
pub const PROJECT_PATH_ENV: &str = "DESIGN_DOCS_PROJECT_PATH";

/// Document service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Root under which every document path is resolved
    pub project_root: PathBuf,
    /// Largest document the service will read (bytes)
    pub max_document_bytes: u64,
    /// Top-level directories scanned when listing documents
    pub scan_dirs: Vec<String>,
    /// File extensions (without dot) considered documents when listing
    pub document_extensions: Vec<String>,
}

impl ServiceConfig {
    /// Create configuration for a project root
    #[inline]
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    /// Resolve the project root from the environment, falling back to the
    /// current directory
    #[must_use]
    pub fn from_env() -> Self {
        let root = std::env::var_os(PROJECT_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    /// With max document size
    #[inline]
    #[must_use]
    pub fn with_max_document_bytes(mut self, max: u64) -> Self {
        self.max_document_bytes = max;
        self
    }

    /// With scanned directories
    #[must_use]
    pub fn with_scan_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scan_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Project root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.project_root
    }

    /// Whether a path has one of the document extensions
    #[must_use]
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.document_extensions.iter().any(|d| d == ext))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            max_document_bytes: 10 * 1024 * 1024, // 10MB
            scan_dirs: vec![
                "docs".to_string(),
                "generator_instructions".to_string(),
                "meta".to_string(),
            ],
            document_extensions: vec!["md".to_string(), "yaml".to_string(), "yml".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServiceConfig::new("/tmp/project");
        assert_eq!(config.root(), Path::new("/tmp/project"));
        assert_eq!(config.max_document_bytes, 10 * 1024 * 1024);
        assert_eq!(config.scan_dirs, vec!["docs", "generator_instructions", "meta"]);
    }

    #[test]
    fn document_extensions() {
        let config = ServiceConfig::default();
        assert!(config.is_document(Path::new("docs/a.md")));
        assert!(config.is_document(Path::new("docs/a.yml")));
        assert!(!config.is_document(Path::new("docs/a.json")));
        assert!(!config.is_document(Path::new("docs/Makefile")));
    }

    #[test]
    fn builders() {
        let config = ServiceConfig::new(".")
            .with_max_document_bytes(16)
            .with_scan_dirs(["docs"]);
        assert_eq!(config.max_document_bytes, 16);
        assert_eq!(config.scan_dirs, vec!["docs"]);
    }
}
