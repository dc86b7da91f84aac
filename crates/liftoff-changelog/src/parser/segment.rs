//! Version segmentation
//!
//! A version heading is a markdown heading (`#`, `##`, ...) followed by a
//! space and a `MAJOR.MINOR.PATCH` number, bracketed or not:
//!
//! ```text
//! ## [1.2.3](https://example/releases/1.2.3) (2021-01-01)
//! # 1.2.3
//! ```

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::types::VersionChunk;

/// Regex for version heading lines
static VERSION_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+ \[*\d+\.\d+\.\d+\]*").expect("Invalid regex"));

/// Byte offsets of every version heading, in document order
pub fn version_offsets(text: &str) -> Vec<usize> {
    VERSION_HEADING_REGEX
        .find_iter(text)
        .map(|m| m.start())
        .collect()
}

/// Slice out the newest version: from the first version heading up to the
/// second one, or to the end of the text when there is only one.
pub fn first_version_chunk(text: &str) -> Option<VersionChunk> {
    let offsets = version_offsets(text);
    debug!(heading_count = offsets.len(), offsets = ?offsets, "version headings located");

    let start = *offsets.first()?;
    let end = offsets.get(1).copied().unwrap_or(text.len());

    Some(VersionChunk::new(start, &text[start..end]))
}
