//! Version heading parsing

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{ParseMiss, VersionChunk, VersionHeader};

/// Regex for a linked version: `[1.2.3](https://...)`
static VERSION_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?P<version>\d+\.\d+\.\d+)\]\((?P<url>[^)]+)").expect("Invalid regex")
});

/// Extract version and release URL from a version heading line.
///
/// Headings without a link (`## 1.2.3`) yield `None`.
pub fn parse_version_header(line: &str) -> Option<VersionHeader> {
    let caps = VERSION_LINK_REGEX.captures(line)?;

    Some(VersionHeader {
        version: caps.name("version")?.as_str().to_string(),
        url: caps.name("url")?.as_str().to_string(),
    })
}

/// Read the version header from a chunk's first line.
pub fn chunk_header(chunk: &VersionChunk) -> Result<VersionHeader, ParseMiss> {
    let line = chunk.header_line();
    if line.is_empty() {
        return Err(ParseMiss::EmptyHeader);
    }
    parse_version_header(line).ok_or(ParseMiss::HeaderMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_header() {
        let chunk = VersionChunk::new(0, "## [1.0.0](http://x/1.0.0)\n### Bugs\n");
        assert_eq!(
            chunk_header(&chunk),
            Ok(VersionHeader {
                version: "1.0.0".to_string(),
                url: "http://x/1.0.0".to_string(),
            })
        );

        let unlinked = VersionChunk::new(0, "## 1.0.0\n");
        assert_eq!(chunk_header(&unlinked), Err(ParseMiss::HeaderMismatch));

        let blank = VersionChunk::new(0, "\n### Bugs\n");
        assert_eq!(chunk_header(&blank), Err(ParseMiss::EmptyHeader));
    }

    #[test]
    fn test_linked_heading() {
        let header =
            parse_version_header("## [1.2.3](https://example/releases/1.2.3) (2021-01-01)").unwrap();
        assert_eq!(header.version, "1.2.3");
        assert_eq!(header.url, "https://example/releases/1.2.3");
    }

    #[test]
    fn test_compare_link() {
        let header = parse_version_header(
            "### [0.4.1](https://github.com/acme/api/compare/v0.4.0...v0.4.1) (2021-03-04)",
        )
        .unwrap();
        assert_eq!(header.version, "0.4.1");
        assert_eq!(
            header.url,
            "https://github.com/acme/api/compare/v0.4.0...v0.4.1"
        );
    }

    #[test]
    fn test_unlinked_heading() {
        assert!(parse_version_header("## 1.2.3 (2021-01-01)").is_none());
        assert!(parse_version_header("## [1.2.3] - 2021-01-01").is_none());
        assert!(parse_version_header("").is_none());
    }

    #[test]
    fn test_placeholder_heading() {
        assert!(parse_version_header("## [1.2.3]()").is_none());
    }
}
