//! Marker-delimited sections
//!
//! ```text
//! <!-- AI_EDITABLE_START: overview -->
//! ...interior...
//! <!-- AI_EDITABLE_END: overview -->
//! ```
//!
//! Matching is literal substring search. The first start sentinel and the
//! first end sentinel following it delimit the section; later pairs with the
//! same name are never touched.

use crate::error::SectionError;
use std::ops::Range;

/// Start sentinel for a section name
#[must_use]
pub fn start_marker(section_name: &str) -> String {
    format!("<!-- AI_EDITABLE_START: {section_name} -->")
}

/// End sentinel for a section name
#[must_use]
pub fn end_marker(section_name: &str) -> String {
    format!("<!-- AI_EDITABLE_END: {section_name} -->")
}

/// Byte span of a marker section within its document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpan {
    /// From the first byte of the start sentinel to the last byte of the end sentinel
    pub outer: Range<usize>,
    /// Bytes strictly between the two sentinels
    pub inner: Range<usize>,
}

impl MarkerSpan {
    /// Interior text, sentinels excluded
    #[inline]
    #[must_use]
    pub fn interior<'a>(&self, content: &'a str) -> &'a str {
        &content[self.inner.clone()]
    }
}

/// Locate the first marker pair for `section_name`
///
/// # Errors
/// - `SectionError::MarkersNotFound` if either sentinel is absent
/// - `SectionError::UnbalancedMarkers` if the end sentinel only occurs before
///   the start sentinel
pub fn locate_marker_section(content: &str, section_name: &str) -> Result<MarkerSpan, SectionError> {
    let start = start_marker(section_name);
    let end = end_marker(section_name);

    let (Some(start_at), true) = (content.find(&start), content.contains(&end)) else {
        return Err(SectionError::markers_not_found(section_name));
    };

    let inner_start = start_at + start.len();
    let inner_end = content[inner_start..]
        .find(&end)
        .map(|offset| inner_start + offset)
        .ok_or_else(|| SectionError::unbalanced(section_name))?;

    Ok(MarkerSpan {
        outer: start_at..inner_end + end.len(),
        inner: inner_start..inner_end,
    })
}

/// Replace the interior of the first marker pair for `section_name`
///
/// The sentinels are re-emitted verbatim around `new_content`, each separated
/// from it by a single newline. Everything outside the pair is preserved
/// byte-for-byte. `new_content` is inserted literally, even if it contains
/// sentinel-like text.
///
/// # Errors
/// Same as [`locate_marker_section`]; on error no output is produced.
pub fn update_marker_section(
    content: &str,
    section_name: &str,
    new_content: &str,
) -> Result<String, SectionError> {
    let span = locate_marker_section(content, section_name)?;
    let start = start_marker(section_name);
    let end = end_marker(section_name);

    let mut updated = String::with_capacity(
        content.len() - span.outer.len() + start.len() + new_content.len() + end.len() + 2,
    );
    updated.push_str(&content[..span.outer.start]);
    updated.push_str(&start);
    updated.push('\n');
    updated.push_str(new_content);
    updated.push('\n');
    updated.push_str(&end);
    updated.push_str(&content[span.outer.end..]);

    Ok(updated)
}
