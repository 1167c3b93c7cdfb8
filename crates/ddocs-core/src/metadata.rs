//! Metadata placeholder substitution
//!
//! Templates ship with literal placeholders. Filling replaces every
//! occurrence anywhere in the document; there is no marker delimitation.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

/// Date placeholder token
pub const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

/// Author placeholder token
pub const AUTHOR_PLACEHOLDER: &str = "[担当者/AIエージェント名]";

static VERSION_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"version:\s*"[^"]*""#).expect("version pattern is valid"));

/// Values to substitute
///
/// `date` is always applied (callers default it to today); `author` and
/// `version` only when given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFill {
    /// Replaces the date placeholder
    pub date: String,
    /// Replaces the author placeholder when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Replaces the version field when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl MetadataFill {
    /// Fill with a date only
    #[inline]
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// With author
    #[inline]
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// With version
    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Apply `fill` to `content`
#[must_use]
pub fn fill_metadata(content: &str, fill: &MetadataFill) -> String {
    let mut out = content.replace(DATE_PLACEHOLDER, &fill.date);

    if let Some(author) = &fill.author {
        out = out.replace(AUTHOR_PLACEHOLDER, author);
    }

    if let Some(version) = &fill.version {
        let field = format!("version: \"{version}\"");
        out = VERSION_FIELD
            .replace_all(&out, NoExpand(&field))
            .into_owned();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "version: \"1.0\"\nlast_updated: YYYY-MM-DD\n\n_最終更新日: YYYY-MM-DD_\n_更新者: [担当者/AIエージェント名]_\n";

    #[test]
    fn date_is_replaced_everywhere() {
        let out = fill_metadata(DOC, &MetadataFill::new("2024-05-01"));
        assert!(!out.contains(DATE_PLACEHOLDER));
        assert_eq!(out.matches("2024-05-01").count(), 2);
        assert!(out.contains(AUTHOR_PLACEHOLDER));
        assert!(out.contains("version: \"1.0\""));
    }

    #[test]
    fn author_and_version() {
        let fill = MetadataFill::new("2024-05-01")
            .with_author("docs-bot")
            .with_version("2.1");
        let out = fill_metadata(DOC, &fill);
        assert_eq!(
            out,
            "version: \"2.1\"\nlast_updated: 2024-05-01\n\n_最終更新日: 2024-05-01_\n_更新者: docs-bot_\n"
        );
    }

    #[test]
    fn version_pattern_tolerates_spacing() {
        let out = fill_metadata("version:\"0.1\"\nversion:   \"\"\n", &MetadataFill::new("d").with_version("3"));
        assert_eq!(out, "version: \"3\"\nversion: \"3\"\n");
    }

    #[test]
    fn unquoted_version_is_left_alone() {
        let out = fill_metadata("version: 1.0\n", &MetadataFill::new("d").with_version("3"));
        assert_eq!(out, "version: 1.0\n");
    }

    #[test]
    fn dollar_in_version_is_literal() {
        let out = fill_metadata("version: \"1\"", &MetadataFill::new("d").with_version("$1"));
        assert_eq!(out, "version: \"$1\"");
    }

    #[test]
    fn no_placeholders_is_identity() {
        let content = "# Plain\n\nNothing to fill.\n";
        assert_eq!(fill_metadata(content, &MetadataFill::new("2024-05-01")), content);
    }
}
