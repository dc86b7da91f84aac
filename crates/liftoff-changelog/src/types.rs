//! Changelog types

use serde::{Deserialize, Serialize};

/// The newest version's slice of a changelog, heading line included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChunk {
    /// Byte offset of the version heading in the full changelog
    pub offset: usize,
    /// Chunk text, up to but excluding the next version heading
    pub text: String,
}

impl VersionChunk {
    /// Create a new chunk
    pub fn new(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            text: text.into(),
        }
    }

    /// The version heading line
    pub fn header_line(&self) -> &str {
        match self.text.split_once('\n') {
            Some((line, _)) => line,
            None => &self.text,
        }
    }

    /// Every line after the version heading
    pub fn body(&self) -> &str {
        match self.text.split_once('\n') {
            Some((_, body)) => body,
            None => "",
        }
    }
}

/// Version number and release link from a version heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionHeader {
    /// Version string (MAJOR.MINOR.PATCH)
    pub version: String,
    /// Release or compare URL
    pub url: String,
}

/// One commit bullet from a release section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEntry {
    /// Bold label before the colon (usually the scope)
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Commit subject, possibly wrapped over several lines
    pub message: String,
    /// Link text, usually the short hash
    pub hash: String,
    /// Commit URL
    pub url: String,
}

/// A `### ` subsection of a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub heading: String,
    /// Rendered commit lines, trimmed
    pub text: String,
    /// Commits in this section
    pub commits: Vec<CommitEntry>,
}

impl Section {
    /// Check if section has no commits
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// The newest release of a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Version and link
    #[serde(flatten)]
    pub header: VersionHeader,
    /// Sections in document order
    pub sections: Vec<Section>,
}

impl Release {
    /// Total number of commits across sections
    pub fn commit_count(&self) -> usize {
        self.sections.iter().map(|s| s.commits.len()).sum()
    }
}

/// Why no release could be read from a changelog.
///
/// None of these are errors; a run that hits one finishes without sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMiss {
    /// No version heading anywhere in the text
    NoVersionHeading,
    /// The version heading line is empty
    EmptyHeader,
    /// The heading has no `[version](url)` link
    HeaderMismatch,
}

impl std::fmt::Display for ParseMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::NoVersionHeading => "no version heading found",
            Self::EmptyHeader => "version heading line is empty",
            Self::HeaderMismatch => "version heading has no [version](url) link",
        };
        f.write_str(reason)
    }
}
