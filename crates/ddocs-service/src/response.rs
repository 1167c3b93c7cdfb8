//! Outward result records
//!
//! Successes serialize as `{"success": true, ...fields}`; failures as
//! `{"success": false, "error": <message>, "kind": <tag>}`.

use crate::error::{ServiceError, ServiceResult};
use serde::Serialize;
use serde_json::{json, Value};

/// Section lookup result; `section` is null when no heading matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRecord {
    /// Heading line plus body
    pub section: Option<String>,
}

/// Confirmation message for a write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageRecord {
    /// Create from message
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Created document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedRecord {
    /// Absolute path of the written file
    pub path: String,
    /// Catalog template the document was rendered from
    pub template_type: String,
}

#[derive(Serialize)]
struct Success<'a, T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

/// Success record with `body`'s fields inlined
///
/// `body` must serialize as a map or struct.
#[must_use]
pub fn success<T: Serialize>(body: &T) -> Value {
    serde_json::to_value(Success {
        success: true,
        body,
    })
    .unwrap_or_else(|e| json!({ "success": false, "error": e.to_string(), "kind": "Serialize" }))
}

/// Failure record for an error
#[must_use]
pub fn failure(err: &ServiceError) -> Value {
    json!({
        "success": false,
        "error": err.to_string(),
        "kind": err.kind(),
    })
}

/// Turn an operation result into its outward record
#[must_use]
pub fn respond<T: Serialize>(result: &ServiceResult<T>) -> Value {
    match result {
        Ok(body) => success(body),
        Err(err) => failure(err),
    }
}
