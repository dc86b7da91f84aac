//! Slack incoming webhooks

mod blocks;
mod webhook;

pub use blocks::{Block, Message, TextObject};
pub use webhook::SlackWebhook;
