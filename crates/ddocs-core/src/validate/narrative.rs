//! Narrative-document validation
//!
//! Completeness hints only: missing expected headings and a missing
//! last-updated stamp become warnings, never errors.

use super::ValidationResult;
use crate::error::ValidationIssue;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Literal marker of the last-updated stamp
pub const UPDATE_DATE_MARKER: &str = "_最終更新日:";

static REQUIRED_HEADINGS: Lazy<IndexMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    IndexMap::from([
        (
            "vision.md",
            &["プロダクトの目的", "解決したい課題", "ターゲットユーザー"][..],
        ),
        ("system_overview.md", &["システム全体図", "コンポーネント構成"][..]),
        ("coding_standards.md", &["言語別の基準"][..]),
    ])
});

/// Expected sub-headings for a narrative document name
///
/// Unregistered names have no expectations.
#[must_use]
pub fn narrative_requirements(doc_kind: &str) -> &'static [&'static str] {
    REQUIRED_HEADINGS.get(doc_kind).copied().unwrap_or(&[])
}

/// Validate narrative content for the document named `doc_kind`
///
/// Heading presence is plain substring containment, not position-aware.
#[must_use]
pub fn validate_narrative(content: &str, doc_kind: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for heading in narrative_requirements(doc_kind) {
        if !content.contains(heading) {
            result.push_warning(ValidationIssue::MissingSection {
                heading: (*heading).to_string(),
            });
        }
    }

    if !content.contains(UPDATE_DATE_MARKER) {
        result.push_warning(ValidationIssue::MissingUpdateMetadata);
    }

    result
}
