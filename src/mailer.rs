use anyhow::Context;
use axum::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::EmailConfig;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Dispatches mail through an HTTP relay API.
#[derive(Clone)]
pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
}

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl HttpMailer {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        let message = OutboundMessage {
            from: &self.from,
            to,
            subject,
            text: body,
        };

        self.client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&message)
            .send()
            .await
            .context("send mail request")?
            .error_for_status()
            .context("mail relay rejected message")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_message_serialization() {
        let message = OutboundMessage {
            from: "no-reply@example.com",
            to: "user@example.com",
            subject: "Password Reset",
            text: "visit the link",
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("user@example.com"));
        assert!(json.contains("Password Reset"));
    }
}
