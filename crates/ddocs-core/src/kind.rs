//! Document kind inference
//!
//! A document's kind is resolved once, from its file name, and then carried
//! as a tagged variant through validation dispatch.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions treated as structured (data-interchange) documents
pub const STRUCTURED_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// How a document is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Key/value document checked against a schema
    Structured,
    /// Free text checked for expected sub-headings
    Narrative,
}

impl DocumentKind {
    /// Infer kind from a path's suffix
    ///
    /// `.yaml` / `.yml` are structured; anything else is narrative.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let is_structured = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| STRUCTURED_EXTENSIONS.contains(&ext));

        if is_structured {
            Self::Structured
        } else {
            Self::Narrative
        }
    }

    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Narrative => "narrative",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File name used as the schema / doc-kind key
///
/// Directory components are ignored: `docs/product/requirements.yaml` keys
/// as `requirements.yaml`.
#[must_use]
pub fn document_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
