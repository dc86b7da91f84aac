//! Commit bullet extraction
//!
//! Release sections list commits in the conventional-changelog style:
//!
//! ```text
//! - **scope:** subject that may wrap
//!   onto the next line ([abc1234](https://example/commit/abc1234))
//! ```
//!
//! Bullets that do not follow this shape are skipped.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::types::CommitEntry;

/// Regex for one commit bullet; the message may span lines
static COMMIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)- \*\*(?P<type>[^:]+):\*\* (?P<message>[^(]+) \(\[(?P<hash>[^\]]+)\]\((?P<url>[^)]+)\)",
    )
    .expect("Invalid regex")
});

/// Extract every commit bullet from one section's text, left to right
pub fn extract_commits(text: &str) -> Vec<CommitEntry> {
    let commits: Vec<CommitEntry> = COMMIT_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            Some(CommitEntry {
                commit_type: caps.name("type")?.as_str().to_string(),
                message: caps.name("message")?.as_str().to_string(),
                hash: caps.name("hash")?.as_str().to_string(),
                url: caps.name("url")?.as_str().to_string(),
            })
        })
        .collect();

    debug!(commit_count = commits.len(), "commits extracted");
    commits
}

/// Render commits as Slack mrkdwn bullet lines
pub fn render_commits(commits: &[CommitEntry]) -> String {
    let mut output = String::new();

    for commit in commits {
        output.push_str(&format!(
            "• *{}:* {} (<{}|{}>)\n",
            commit.commit_type,
            commit.message.replace('\n', ""),
            commit.url,
            commit.hash
        ));
    }

    output.trim().to_string()
}
