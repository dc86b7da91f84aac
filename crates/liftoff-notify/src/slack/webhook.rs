//! Slack incoming webhook client

use liftoff_core::{DeliveryError, Result};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use super::blocks::Message;
use crate::traits::WebhookSender;

/// Slack incoming webhook
pub struct SlackWebhook {
    url: Url,
    client: Client,
}

impl SlackWebhook {
    /// Create a webhook client for the given URL
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl WebhookSender for SlackWebhook {
    fn name(&self) -> &str {
        "slack"
    }

    #[instrument(skip(self, message), fields(host = self.url.host_str().unwrap_or(""), block_count = message.blocks.len()))]
    async fn send(&self, message: &Message) -> Result<()> {
        debug!("posting message to webhook");

        let response = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| DeliveryError::Request(error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        info!(status = status.as_u16(), "message delivered");
        Ok(())
    }
}

/// Render an error with its causes, `outer: inner: root`.
///
/// reqwest's own message names only the URL; the reason sits further down.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slack::Block;
    use liftoff_core::LiftoffError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_message() -> Message {
        let mut message = Message::new();
        message.push(Block::mrkdwn(
            ":rocket: New *billing* release <http://x/1.0.0|v1.0.0>",
        ));
        message
    }

    fn webhook_for(server: &MockServer) -> SlackWebhook {
        let url = Url::parse(&format!("{}/services/T/B/X", server.uri())).unwrap();
        SlackWebhook::new(url)
    }

    #[tokio::test]
    async fn test_send_posts_blocks() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/T/B/X"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "blocks": [{
                    "type": "section",
                    "text": {
                        "type": "mrkdwn",
                        "text": ":rocket: New *billing* release <http://x/1.0.0|v1.0.0>"
                    }
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        webhook_for(&mock_server)
            .send(&sample_message())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rejected_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid_blocks"))
            .mount(&mock_server)
            .await;

        let err = webhook_for(&mock_server)
            .send(&sample_message())
            .await
            .unwrap_err();

        match err {
            LiftoffError::Delivery(DeliveryError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid_blocks");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_network_fault() {
        // Reserve a port, then release it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let webhook = SlackWebhook::new(Url::parse(&format!("http://127.0.0.1:{port}/hook")).unwrap());

        let err = webhook.send(&sample_message()).await.unwrap_err();
        assert!(matches!(
            err,
            LiftoffError::Delivery(DeliveryError::Request(_))
        ));
        let text = err.to_string();
        assert!(text.starts_with("Webhook request failed"));
        assert!(
            text.to_lowercase().contains("connection refused"),
            "cause missing from: {text}"
        );
    }

    #[test]
    fn test_error_chain_includes_causes() {
        #[derive(Debug, thiserror::Error)]
        #[error("error sending request")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }
}
