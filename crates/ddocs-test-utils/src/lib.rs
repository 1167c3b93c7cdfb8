//! Testing utilities for the ddocs workspace
//!
//! Temporary project roots and canned documents.

#![allow(missing_docs)]

use ddocs_service::{DocumentService, ServiceConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MARKED_DOC: &str = "# System Overview\n\n## Summary\n\nIntro text.\n\n<!-- AI_EDITABLE_START: components -->\n- api\n- worker\n<!-- AI_EDITABLE_END: components -->\n\n## Notes\n\nKeep this.\n";

pub const VALID_REQUIREMENTS: &str = "version: \"1.0\"\nlast_updated: YYYY-MM-DD\n\nfeatures:\n  - id: F001\n    name: \"Login\"\n    description: \"Users sign in\"\n    priority: high\n";

pub const COMPLETE_VISION: &str = "# プロダクトビジョン\n\n## プロダクトの目的\n\n目的\n\n## 解決したい課題\n\n課題\n\n## ターゲットユーザー\n\nユーザー\n\n---\n\n_最終更新日: 2024-01-01_\n";

/// A project root on disk that is removed on drop
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    pub fn config(&self) -> ServiceConfig {
        ServiceConfig::new(self.root())
    }

    /// Filesystem-backed service rooted at this project
    pub fn service(&self) -> DocumentService {
        DocumentService::new(self.config())
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}
