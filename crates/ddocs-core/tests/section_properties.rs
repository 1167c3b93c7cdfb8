//! Property tests for section lookup and marker replacement.
//!
//! These exercise the guarantees callers rely on when editing documents in
//! place: lookups never mutate and return exactly the addressed lines, and a
//! marker update touches nothing outside its span.

use ddocs_core::section::{
    end_marker, locate_header_section, locate_marker_section, start_marker,
    update_marker_section,
};
use ddocs_core::SectionError;
use proptest::prelude::*;

/// Body lines that never open a level-2 heading and never contain sentinels.
fn body_line() -> impl Strategy<Value = String> {
    "[a-z0-9 .,#-]{0,24}".prop_filter("must not open an h2", |line| {
        !(line.starts_with("## ") || line.starts_with("##\t"))
    })
}

fn body() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(body_line(), 0..8)
}

fn section_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,12}"
}

proptest! {
    /// Lookup returns exactly the heading line through the line before the
    /// next level-2 heading, trimmed.
    #[test]
    fn header_lookup_returns_exact_block(
        before in body(),
        name in section_name(),
        inside in body(),
        after in body(),
        closed in any::<bool>(),
    ) {
        let before: Vec<String> = before.into_iter().map(|l| l.replace('#', "")).collect();
        let mut lines = before.clone();
        lines.push(format!("## {name}"));
        lines.extend(inside.iter().cloned());
        if closed {
            lines.push("## Zzz next".to_string());
            lines.extend(after.iter().cloned());
        }
        let content = lines.join("\n");

        let mut expected = vec![format!("## {name}")];
        expected.extend(inside.iter().cloned());
        let expected = expected.join("\n").trim().to_string();

        prop_assert_eq!(locate_header_section(&content, &name), Some(expected));
    }

    /// Lookup is read-only and deterministic.
    #[test]
    fn header_lookup_is_idempotent(content in "[#a-z \n]{0,200}", name in section_name()) {
        let snapshot = content.clone();
        let first = locate_header_section(&content, &name);
        let second = locate_header_section(&content, &name);
        prop_assert_eq!(first, second);
        prop_assert_eq!(content, snapshot);
    }

    /// After an update the interior between the sentinels is exactly the new
    /// content, framed by one newline on each side.
    #[test]
    fn marker_update_round_trips(
        prefix in "[a-z \n]{0,40}",
        old in "[a-z \n]{0,40}",
        suffix in "[a-z \n]{0,40}",
        name in section_name(),
        new in "[a-zA-Z0-9 \n]{0,60}",
    ) {
        let content = format!("{prefix}{}{old}{}{suffix}", start_marker(&name), end_marker(&name));
        let updated = update_marker_section(&content, &name, &new).unwrap();

        let span = locate_marker_section(&updated, &name).unwrap();
        prop_assert_eq!(span.interior(&updated), format!("\n{new}\n"));
    }

    /// Bytes before and after the marker span are preserved.
    #[test]
    fn marker_update_preserves_outside_bytes(
        prefix in "[a-z #\n]{0,60}",
        old in "[a-z \n]{0,40}",
        suffix in "[a-z #\n]{0,60}",
        name in section_name(),
        new in "[a-z \n]{0,40}",
    ) {
        let content = format!("{prefix}{}{old}{}{suffix}", start_marker(&name), end_marker(&name));
        let updated = update_marker_section(&content, &name, &new).unwrap();

        prop_assert!(updated.starts_with(&prefix));
        prop_assert!(updated.ends_with(&suffix));
        let middle = &updated[prefix.len()..updated.len() - suffix.len()];
        prop_assert_eq!(
            middle,
            format!("{}\n{new}\n{}", start_marker(&name), end_marker(&name))
        );
    }

    /// Without both sentinels the update fails and produces nothing.
    #[test]
    fn marker_update_requires_both_sentinels(
        content in "[a-z \n]{0,80}",
        name in section_name(),
        keep_start in any::<bool>(),
    ) {
        let content = if keep_start {
            format!("{content}{}", start_marker(&name))
        } else {
            format!("{}{content}", end_marker(&name))
        };
        prop_assert_eq!(
            update_marker_section(&content, &name, "x"),
            Err(SectionError::markers_not_found(name.clone()))
        );
    }
}
