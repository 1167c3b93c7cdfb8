//! Header-delimited sections
//!
//! A header section starts at the first line that reads `## <name>`
//! (case-insensitive, surrounding whitespace ignored) and runs up to the next
//! line opening a level-2 heading, or end of document.

/// Level-2 heading token
const H2: &str = "##";

/// Locate a header section by name
///
/// Returns the heading line plus its body, trimmed. Only the first matching
/// heading is considered.
#[must_use]
pub fn locate_header_section(content: &str, section_name: &str) -> Option<String> {
    let wanted = section_name.trim().to_lowercase();
    let mut lines = content.split('\n');

    let heading = lines.by_ref().find(|line| heading_matches(line, &wanted))?;

    let mut block = vec![heading];
    block.extend(lines.take_while(|line| !opens_h2(line)));

    Some(block.join("\n").trim().to_string())
}

/// Whether a line is `## <wanted>` once trimmed
fn heading_matches(line: &str, wanted: &str) -> bool {
    let Some(rest) = line.trim().strip_prefix(H2) else {
        return false;
    };
    rest.starts_with(char::is_whitespace) && rest.trim().to_lowercase() == wanted
}

/// Whether a raw line opens any level-2 heading (`^##\s+`)
fn opens_h2(line: &str) -> bool {
    line.strip_prefix(H2)
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "# Vision\n\nintro\n\n## Goals\n\n- ship it\n- keep it small\n\n### Detail\n\nnested\n\n## Risks\n\nnone\n";

    #[test]
    fn returns_heading_and_body_up_to_next_h2() {
        let section = locate_header_section(DOC, "Goals").unwrap();
        assert_eq!(
            section,
            "## Goals\n\n- ship it\n- keep it small\n\n### Detail\n\nnested"
        );
    }

    #[test]
    fn last_section_runs_to_end_of_document() {
        let section = locate_header_section(DOC, "Risks").unwrap();
        assert_eq!(section, "## Risks\n\nnone");
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(locate_header_section(DOC, "goals").is_some());
        assert!(locate_header_section(DOC, "RISKS").is_some());
    }

    #[test]
    fn deeper_headings_do_not_match() {
        assert_eq!(locate_header_section(DOC, "Detail"), None);
    }

    #[test]
    fn h1_does_not_match() {
        assert_eq!(locate_header_section(DOC, "Vision"), None);
    }

    #[test]
    fn missing_section_is_none() {
        assert_eq!(locate_header_section(DOC, "Budget"), None);
        assert_eq!(locate_header_section("", "Budget"), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let doc = "## Notes\nfirst\n## Other\nx\n## Notes\nsecond\n";
        assert_eq!(locate_header_section(doc, "Notes").unwrap(), "## Notes\nfirst");
    }

    #[test]
    fn indented_heading_matches_after_trim() {
        let doc = "  ## Scope  \nbody\n";
        assert_eq!(locate_header_section(doc, "Scope").unwrap(), "## Scope  \nbody");
    }

    #[test]
    fn crlf_lines_match() {
        let doc = "## Scope\r\nbody\r\n## Next\r\n";
        assert_eq!(locate_header_section(doc, "Scope").unwrap(), "## Scope\r\nbody");
    }

    #[test]
    fn non_ascii_heading() {
        let doc = "## プロダクトの目的\n目的: 共有\n## 解決したい課題\n";
        assert_eq!(
            locate_header_section(doc, "プロダクトの目的").unwrap(),
            "## プロダクトの目的\n目的: 共有"
        );
    }

    #[test]
    fn heading_without_space_is_not_a_heading() {
        assert!(!opens_h2("##Goals"));
        assert!(!opens_h2("### Goals"));
        assert!(opens_h2("## Goals"));
        assert!(opens_h2("##\tGoals"));
    }
}
