//! Document validation
//!
//! Both validators return the same [`ValidationResult`] shape. Structured
//! documents can fail; narrative documents only ever produce warnings.

use crate::error::ValidationIssue;
use crate::kind::DocumentKind;
use serde::ser::{Serialize, SerializeStruct, Serializer};

mod narrative;
mod structured;

pub use narrative::{narrative_requirements, validate_narrative, UPDATE_DATE_MARKER};
pub use structured::{decode_structured, validate_structured, validate_structured_with};

/// Outcome of validating one document
///
/// `valid` is derived: it is false exactly when at least one error was
/// recorded. Warnings never affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Empty, valid result
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Record a warning
    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Whether no errors were recorded
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded errors, in order
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    /// Recorded warnings, in order
    #[inline]
    #[must_use]
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    /// Error messages as they appear in the outward record
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Warning messages as they appear in the outward record
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.error_messages())?;
        state.serialize_field("warnings", &self.warning_messages())?;
        state.end()
    }
}

/// Validate `content` according to its kind
///
/// `name` is the document file name; it selects the schema for structured
/// documents and the expected headings for narrative ones.
#[must_use]
pub fn validate(kind: DocumentKind, content: &str, name: &str) -> ValidationResult {
    let result = match kind {
        DocumentKind::Structured => validate_structured(content, name),
        DocumentKind::Narrative => validate_narrative(content, name),
    };
    tracing::debug!(
        document = name,
        %kind,
        valid = result.is_valid(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "validated document"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_follows_errors_only() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.push_warning(ValidationIssue::MissingUpdateMetadata);
        assert!(result.is_valid());

        result.push_error(ValidationIssue::missing_field("roles"));
        assert!(!result.is_valid());
    }

    #[test]
    fn serializes_outward_shape() {
        let mut result = ValidationResult::new();
        result.push_error(ValidationIssue::missing_field("features"));
        result.push_warning(ValidationIssue::MissingUpdateMetadata);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "errors": ["Missing required field: features"],
                "warnings": ["Missing update date metadata"],
            })
        );
    }

    #[test]
    fn dispatch_by_kind() {
        let structured = validate(DocumentKind::Structured, "{}", "roles.yaml");
        assert_eq!(structured.error_messages(), vec!["Missing required field: roles"]);

        let narrative = validate(DocumentKind::Narrative, "{}", "roles.yaml");
        assert!(narrative.is_valid());
        assert_eq!(narrative.warning_messages(), vec!["Missing update date metadata"]);
    }
}
