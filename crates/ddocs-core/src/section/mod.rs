//! Section addressing
//!
//! Two disjoint conventions:
//! - header sections (`## Name`), read-only
//! - marker sections (`AI_EDITABLE_START` / `AI_EDITABLE_END`), the only
//!   sections eligible for update

mod header;
mod marker;
mod outline;

pub use header::locate_header_section;
pub use marker::{
    end_marker, locate_marker_section, start_marker, update_marker_section, MarkerSpan,
};
pub use outline::{outline, Outline};
