//! Section splitting

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::commits::{extract_commits, render_commits};
use crate::types::Section;

/// Regex for subsection headings (`### Features`)
static SECTION_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (?P<title>.+)").expect("Invalid regex"));

/// A section as it appears in the release body, before commit extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection<'a> {
    /// Byte offset of the heading within the release body
    pub offset: usize,
    /// Section title
    pub heading: String,
    /// Text from the heading line up to the next heading
    pub span: &'a str,
}

impl<'a> RawSection<'a> {
    /// Section text with the heading line removed, trimmed
    pub fn commit_text(&self) -> &'a str {
        match self.span.split_once('\n') {
            Some((_, rest)) => rest.trim(),
            None => "",
        }
    }

    /// Extract and render the commits of this section
    pub fn into_section(self) -> Section {
        let commits = extract_commits(self.commit_text());
        let text = render_commits(&commits);
        Section {
            heading: self.heading,
            text,
            commits,
        }
    }
}

/// Split a release body into its `### ` sections, in document order
pub fn split_sections(body: &str) -> Vec<RawSection<'_>> {
    let headings: Vec<(usize, String)> = SECTION_HEADING_REGEX
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = caps.name("title")?.as_str().trim();
            let title = title.strip_prefix("### ").unwrap_or(title).trim();
            Some((whole.start(), title.to_string()))
        })
        .collect();

    debug!(section_count = headings.len(), "section headings located");

    headings
        .iter()
        .enumerate()
        .map(|(index, (offset, heading))| {
            let end = headings
                .get(index + 1)
                .map(|(next, _)| *next)
                .unwrap_or(body.len());
            RawSection {
                offset: *offset,
                heading: heading.clone(),
                span: &body[*offset..end],
            }
        })
        .collect()
}

/// Split a release body and build every section
pub fn parse_sections(body: &str) -> Vec<Section> {
    split_sections(body)
        .into_iter()
        .map(RawSection::into_section)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\n### Features\n\n- **api:** add endpoint ([abc](http://x/commit/abc))\n\n### Bug Fixes\n\n- **db:** close pool ([def](http://x/commit/def))\n- **db:** retry less ([fed](http://x/commit/fed))\n";

    #[test]
    fn test_split_in_document_order() {
        let sections = split_sections(BODY);
        let headings: Vec<&str> = sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Features", "Bug Fixes"]);
        assert_eq!(sections[0].offset, 1);
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let sections = split_sections(BODY);
        assert_eq!(
            sections[0].offset + sections[0].span.len(),
            sections[1].offset
        );
        assert!(!sections[0].span.contains("Bug Fixes"));
        assert!(sections[1].span.ends_with("([fed](http://x/commit/fed))\n"));
    }

    #[test]
    fn test_commit_text_drops_heading() {
        let sections = split_sections(BODY);
        assert_eq!(
            sections[0].commit_text(),
            "- **api:** add endpoint ([abc](http://x/commit/abc))"
        );
    }

    #[test]
    fn test_no_headings() {
        assert!(split_sections("\n- **api:** orphan ([a](http://x/a))\n").is_empty());
        assert!(parse_sections("").is_empty());
    }

    #[test]
    fn test_heading_is_trimmed() {
        let sections = split_sections("### Features   \r\n- x\n");
        assert_eq!(sections[0].heading, "Features");
    }

    #[test]
    fn test_heading_only_section() {
        let sections = parse_sections("### Features");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Features");
        assert_eq!(sections[0].text, "");
        assert!(sections[0].is_empty());
    }

    #[test]
    fn test_section_without_bullets_has_empty_text() {
        let sections = parse_sections("\n### Miscellaneous\n\nJust some prose.\n\n### Features\n\n- **a:** b ([c](http://x/c))\n");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "Miscellaneous");
        assert_eq!(sections[0].text, "");
        assert_eq!(sections[1].text, "• *a:* b (<http://x/c|c>)");
    }

    #[test]
    fn test_unlinked_bullet_stays_in_its_section() {
        let sections = parse_sections(
            "\n### Documentation\n\n- **docs:** no link\n\n### Bug Fixes\n\n- **db:** close pool ([def](http://x/commit/def))\n",
        );
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "Documentation");
        assert_eq!(sections[0].text, "");
        assert!(sections[0].commits.is_empty());
        assert_eq!(sections[1].commits.len(), 1);
        assert_eq!(sections[1].commits[0].commit_type, "db");
        assert_eq!(sections[1].commits[0].message, "close pool");
        assert_eq!(sections[1].text, "• *db:* close pool (<http://x/commit/def|def>)");
    }
}
