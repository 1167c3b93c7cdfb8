//! Section outline
//!
//! Lists what a caller can address in a document: level-2 heading titles
//! (via pulldown-cmark) and editable marker names, each in document order.

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, HeadingLevel, Parser as MdParser, Tag, TagEnd};
use regex::Regex;
use serde::{Deserialize, Serialize};

static START_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!-- AI_EDITABLE_START: (.*?) -->").expect("start marker pattern is valid")
});

/// Addressable sections of one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Level-2 heading titles, readable via header lookup
    pub headings: Vec<String>,
    /// Marker names that have a matching end sentinel, eligible for update
    pub editable: Vec<String>,
}

/// Build the outline of a document
#[must_use]
pub fn outline(content: &str) -> Outline {
    Outline {
        headings: h2_titles(content),
        editable: editable_names(content),
    }
}

fn h2_titles(content: &str) -> Vec<String> {
    let mut titles = Vec::new();
    let mut current: Option<String> = None;

    for event in MdParser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => current = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(ref mut title) = current {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                if let Some(title) = current.take() {
                    titles.push(title.trim().to_string());
                }
            }
            _ => {}
        }
    }

    titles
}

fn editable_names(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in START_MARKER.captures_iter(content) {
        let name = &caps[1];
        let closed = content.contains(&super::end_marker(name));
        if closed && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
