//! Release message formatting

use liftoff_changelog::{Section, VersionHeader};
use tracing::debug;

use crate::slack::{Block, Message};

/// Trait for release message formatters
pub trait ReleaseFormatter: Send + Sync {
    /// Build the message announcing a release
    fn format(&self, service_name: &str, header: &VersionHeader, sections: &[Section]) -> Message;
}

/// Formats releases as Slack section blocks
#[derive(Debug, Clone, Default)]
pub struct SlackFormatter;

impl SlackFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }

    /// Header line announcing the release
    pub fn headline(service_name: &str, header: &VersionHeader) -> String {
        format!(
            ":rocket: New *{}* release <{}|v{}>",
            service_name, header.url, header.version
        )
    }
}

impl ReleaseFormatter for SlackFormatter {
    fn format(&self, service_name: &str, header: &VersionHeader, sections: &[Section]) -> Message {
        let mut message = Message::new();
        message.push(Block::mrkdwn(Self::headline(service_name, header)));

        for section in sections {
            message.push(Block::mrkdwn(format!("*{}*\n{}", section.heading, section.text)));
        }

        debug!(block_count = message.blocks.len(), "release message formatted");
        message
    }
}
