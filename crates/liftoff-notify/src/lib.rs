//! Liftoff Notify - Slack release announcements
//!
//! Formats the newest changelog release as Slack blocks and posts it to an
//! incoming webhook. [`Pipeline`] drives the whole run.

pub mod formatter;
pub mod pipeline;
pub mod slack;
pub mod traits;

pub use formatter::{ReleaseFormatter, SlackFormatter};
pub use pipeline::{Pipeline, RunOutcome, RunState};
pub use slack::{Block, Message, SlackWebhook, TextObject};
pub use traits::WebhookSender;
