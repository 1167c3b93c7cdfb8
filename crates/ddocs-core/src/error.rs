//! Error types for the document engine
//!
//! Two families live here:
//! - [`SectionError`]: hard failures of marker-section lookup and update
//! - [`ValidationIssue`]: findings accumulated into a
//!   [`ValidationResult`](crate::validate::ValidationResult), either as
//!   errors or as advisory warnings

/// Errors during marker-section lookup or replacement
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// Start or end sentinel is absent from the document
    #[error("AI_EDITABLE markers not found for section: {section}")]
    MarkersNotFound { section: String },

    /// Both sentinels exist but no end sentinel follows the start sentinel
    #[error("AI_EDITABLE markers out of order for section: {section}")]
    UnbalancedMarkers { section: String },
}

impl SectionError {
    /// Create markers-not-found error for section
    pub fn markers_not_found(section: impl Into<String>) -> Self {
        Self::MarkersNotFound {
            section: section.into(),
        }
    }

    /// Create unbalanced-markers error for section
    pub fn unbalanced(section: impl Into<String>) -> Self {
        Self::UnbalancedMarkers {
            section: section.into(),
        }
    }

    /// Stable machine tag for this error kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MarkersNotFound { .. } => "MarkersNotFound",
            Self::UnbalancedMarkers { .. } => "UnbalancedMarkers",
        }
    }
}

/// A single validation finding
///
/// The display text is what ends up in the outward `errors` / `warnings`
/// arrays; [`ValidationIssue::kind`] stays stable when wording changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    /// Structured content failed to decode
    #[error("YAML parse error: {message}")]
    DecodeError { message: String },

    /// Schema declares an object root but the document is something else
    #[error("Document must be an object")]
    NotAnObject,

    /// Required top-level field absent
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    /// No schema registered for the document name (advisory)
    #[error("No schema defined for {name}")]
    UnknownSchema { name: String },

    /// Expected narrative sub-heading absent (advisory)
    #[error("Missing section: {heading}")]
    MissingSection { heading: String },

    /// Last-updated stamp absent (advisory)
    #[error("Missing update date metadata")]
    MissingUpdateMetadata,
}

impl ValidationIssue {
    /// Create decode error from any displayable parser error
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::DecodeError {
            message: err.to_string(),
        }
    }

    /// Create missing-field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Stable machine tag for this issue kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DecodeError { .. } => "DecodeError",
            Self::NotAnObject => "NotAnObject",
            Self::MissingRequiredField { .. } => "MissingRequiredField",
            Self::UnknownSchema { .. } => "UnknownSchema",
            Self::MissingSection { .. } => "MissingSection",
            Self::MissingUpdateMetadata => "MissingUpdateMetadata",
        }
    }
}
