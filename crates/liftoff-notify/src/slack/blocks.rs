//! Slack Block Kit payload types
//!
//! Only the subset Liftoff sends: `section` blocks with `mrkdwn` text.

use serde::{Deserialize, Serialize};

/// Webhook payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Blocks in display order
    pub blocks: Vec<Block>,
}

impl Message {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// A layout block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Text section
    Section { text: TextObject },
}

impl Block {
    /// Section block with mrkdwn text
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::Mrkdwn { text: text.into() },
        }
    }

    /// The block's text
    pub fn text(&self) -> &str {
        match self {
            Self::Section {
                text: TextObject::Mrkdwn { text },
            } => text,
        }
    }
}

/// A text composition object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    /// Slack markdown
    Mrkdwn { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let mut message = Message::new();
        message.push(Block::mrkdwn("*Features*\n• *api:* add"));

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "blocks": [
                    {
                        "type": "section",
                        "text": { "type": "mrkdwn", "text": "*Features*\n• *api:* add" }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_block_text() {
        assert_eq!(Block::mrkdwn("hello").text(), "hello");
    }
}
