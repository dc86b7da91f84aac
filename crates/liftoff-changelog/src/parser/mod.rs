//! Changelog parsing
//!
//! Parsing runs in four steps, each usable on its own:
//! [`first_version_chunk`] isolates the newest release,
//! [`parse_version_header`] reads its version link,
//! [`split_sections`] cuts the body at `### ` headings and
//! [`extract_commits`] pulls commit bullets out of a section.

mod commits;
mod header;
mod sections;
mod segment;

pub use commits::{extract_commits, render_commits};
pub use header::{chunk_header, parse_version_header};
pub use sections::{parse_sections, split_sections, RawSection};
pub use segment::{first_version_chunk, version_offsets};

use tracing::{debug, instrument};

use crate::types::{ParseMiss, Release};

/// Parse the newest release of a changelog.
///
/// Returns the reason when the changelog holds no usable release; that is
/// not an error.
#[instrument(skip(text), fields(len = text.len()))]
pub fn parse_latest_release(text: &str) -> Result<Release, ParseMiss> {
    let chunk = first_version_chunk(text).ok_or(ParseMiss::NoVersionHeading)?;

    let header = chunk_header(&chunk)?;

    let sections = parse_sections(chunk.body());
    debug!(
        version = %header.version,
        section_count = sections.len(),
        "latest release parsed"
    );

    Ok(Release { header, sections })
}
