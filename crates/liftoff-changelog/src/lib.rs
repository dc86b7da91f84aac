//! Liftoff Changelog - Release notes extraction
//!
//! This crate finds the newest release in a conventional-changelog style
//! markdown file and breaks it into sections of commit entries.

pub mod parser;
pub mod source;
pub mod types;

pub use parser::parse_latest_release;
pub use source::{ChangelogSource, FileChangelog};
pub use types::{CommitEntry, ParseMiss, Release, Section, VersionChunk, VersionHeader};
