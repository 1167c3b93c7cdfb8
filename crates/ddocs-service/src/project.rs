//! Project introspection
//!
//! Blocking directory walks; the service runs these on the blocking pool.

use crate::config::ServiceConfig;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Summary of the current project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project root as configured
    pub root: String,
    /// Whether the root exists
    pub exists: bool,
    /// Entries below `docs/`, directories included
    pub docs_count: usize,
    /// Whether `CLAUDE.md` exists at the root
    pub has_claude_md: bool,
    /// Subdirectory names of `docs/`, sorted
    pub categories: Vec<String>,
}

/// One document found on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Path relative to the project root, `/`-separated
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// Local modification time, RFC 3339
    pub modified: String,
}

/// Inspect the project root
#[must_use]
pub fn project_info(root: &Path) -> ProjectInfo {
    let mut info = ProjectInfo {
        root: root.display().to_string(),
        exists: root.exists(),
        docs_count: 0,
        has_claude_md: false,
        categories: Vec::new(),
    };

    if !info.exists {
        return info;
    }

    info.has_claude_md = root.join("CLAUDE.md").exists();

    let docs_dir = root.join("docs");
    if docs_dir.is_dir() {
        let categories: BTreeSet<String> = std::fs::read_dir(&docs_dir)
            .into_iter()
            .flatten()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        info.categories = categories.into_iter().collect();
        info.docs_count = WalkDir::new(&docs_dir)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .count();
    }

    info
}

/// List document files under the configured scan directories, sorted by path
#[must_use]
pub fn list_documents(config: &ServiceConfig) -> Vec<DocumentEntry> {
    let root = config.root();
    let mut docs = Vec::new();

    for dir in &config.scan_dirs {
        let scan_root = root.join(dir);
        if !scan_root.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&scan_root).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() || !config.is_document(entry.path()) {
                continue;
            }
            let Ok(meta) = entry.metadata() else {
                tracing::debug!(path = %entry.path().display(), "skipping unreadable entry");
                continue;
            };
            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };

            let modified = meta
                .modified()
                .map(|t| DateTime::<Local>::from(t).to_rfc3339())
                .unwrap_or_default();

            docs.push(DocumentEntry {
                path: rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/"),
                size: meta.len(),
                modified,
            });
        }
    }

    docs.sort_by(|a, b| a.path.cmp(&b.path));
    docs
}
