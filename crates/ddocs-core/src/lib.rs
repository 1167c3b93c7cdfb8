//! ddocs Core
//!
//! Section-addressed editing and structural validation of design documents.
//! Everything in this crate is a pure function over document text; reading
//! and persisting files is the caller's job.
//!
//! # Core Operations
//!
//! - **Locate**: find a `## Heading` section or an `AI_EDITABLE` marker span
//! - **Update**: replace the interior of a marker span, all other bytes kept
//! - **Validate**: schema checks for YAML, heading hints for Markdown
//! - **Fill**: substitute metadata placeholders
//!
//! # Example
//!
//! ```rust
//! use ddocs_core::section::{locate_header_section, update_marker_section};
//! use ddocs_core::validate::validate_structured;
//!
//! let doc = "## Goals\nship\n<!-- AI_EDITABLE_START: g -->\nold\n<!-- AI_EDITABLE_END: g -->\n";
//! assert!(locate_header_section(doc, "goals").is_some());
//!
//! let updated = update_marker_section(doc, "g", "new").unwrap();
//! assert!(updated.contains("\nnew\n"));
//!
//! let result = validate_structured("{}", "requirements.yaml");
//! assert!(!result.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod kind;
pub mod metadata;
pub mod schema;
pub mod section;
pub mod validate;

pub use error::{SectionError, ValidationIssue};
pub use kind::{document_name, DocumentKind};
pub use metadata::{fill_metadata, MetadataFill};
pub use schema::{schemas, Schema, SchemaRegistry, SchemaType};
pub use section::{
    locate_header_section, locate_marker_section, outline, update_marker_section, MarkerSpan,
    Outline,
};
pub use validate::{validate, validate_narrative, validate_structured, ValidationResult};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with documents
    pub use crate::kind::DocumentKind;
    pub use crate::metadata::MetadataFill;
    pub use crate::section::{locate_header_section, update_marker_section};
    pub use crate::validate::{validate, ValidationResult};
    pub use crate::{SectionError, ValidationIssue};
}
