//! Notifier traits

use liftoff_core::Result;

use crate::slack::Message;

/// Trait for webhook destinations
///
/// Implementations deliver a message once; they never retry.
#[async_trait::async_trait]
pub trait WebhookSender: Send + Sync {
    /// Get the destination name, used in logs
    fn name(&self) -> &str;

    /// Deliver a message
    async fn send(&self, message: &Message) -> Result<()>;
}
