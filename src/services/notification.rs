//! # Notification Dispatch
//!
//! Transactional email delivery behind the [`NotificationSender`] trait:
//! a SendGrid-compatible HTTP implementation for real deployments and a
//! no-op implementation for tests and keyless development environments.

use crate::config::EmailConfig;
use crate::error::{Result, SeminarError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A message to deliver: recipient, subject, plain-text body, optional HTML
/// alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

/// Delivers notification emails through an external provider.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver the message, failing with a delivery error if the provider
    /// rejects it or is unreachable.
    async fn send_email(&self, email: &EmailMessage) -> Result<()>;
}

/// SendGrid v3 `mail/send` request body.
#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

/// HTTP client for a SendGrid-compatible transactional-email API.
pub struct SendGridSender {
    client: Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl SendGridSender {
    /// Build a sender from the email configuration.
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!("seminar-registration/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                SeminarError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
        })
    }

    fn build_payload<'a>(&'a self, email: &'a EmailMessage) -> MailSendRequest<'a> {
        let mut content = vec![Content { content_type: "text/plain", value: &email.text }];
        if let Some(html) = &email.html {
            content.push(Content { content_type: "text/html", value: html });
        }
        MailSendRequest {
            personalizations: vec![Personalization { to: vec![Address { email: &email.to }] }],
            from: Address { email: &self.from },
            subject: &email.subject,
            content,
        }
    }
}

#[async_trait]
impl NotificationSender for SendGridSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<()> {
        let url = format!("{}/v3/mail/send", self.base_url);
        let payload = self.build_payload(email);

        debug!(to = %email.to, subject = %email.subject, "Dispatching notification email");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SeminarError::DeliveryError(format!(
                "provider returned {status}: {body}"
            )));
        }

        info!(to = %email.to, "Notification email accepted by provider");
        Ok(())
    }
}

/// Sender that delivers nothing. Used by tests and by deployments without a
/// provider API key, where a lost notification is preferable to a dead
/// registration endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSender;

#[async_trait]
impl NotificationSender for NoopSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<()> {
        warn!(to = %email.to, subject = %email.subject, "Email delivery disabled; dropping notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailConfig;

    fn email_config() -> EmailConfig {
        EmailConfig {
            base_url: "https://api.sendgrid.com".to_string(),
            api_key: "SG.test".to_string(),
            from: "noreply@anyenv-inc.com".to_string(),
            notify_to: "info@anyenv-inc.com".to_string(),
            subject: "【Geminiセミナー】新規登録通知".to_string(),
            timeout_ms: 15_000,
        }
    }

    #[test]
    fn payload_matches_provider_shape() {
        let sender = SendGridSender::from_config(&email_config()).expect("sender");
        let email = EmailMessage {
            to: "info@anyenv-inc.com".to_string(),
            subject: "件名".to_string(),
            text: "本文".to_string(),
            html: Some("<p>本文</p>".to_string()),
        };

        let payload = serde_json::to_value(sender.build_payload(&email)).expect("serialize");
        assert_eq!(payload["personalizations"][0]["to"][0]["email"], "info@anyenv-inc.com");
        assert_eq!(payload["from"]["email"], "noreply@anyenv-inc.com");
        assert_eq!(payload["subject"], "件名");
        assert_eq!(payload["content"][0]["type"], "text/plain");
        assert_eq!(payload["content"][0]["value"], "本文");
        assert_eq!(payload["content"][1]["type"], "text/html");
    }

    #[test]
    fn plain_text_only_payload_has_single_content_part() {
        let sender = SendGridSender::from_config(&email_config()).expect("sender");
        let email = EmailMessage {
            to: "info@anyenv-inc.com".to_string(),
            subject: "件名".to_string(),
            text: "本文".to_string(),
            html: None,
        };

        let payload = serde_json::to_value(sender.build_payload(&email)).expect("serialize");
        assert_eq!(payload["content"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn noop_sender_always_succeeds() {
        let email = EmailMessage {
            to: "info@anyenv-inc.com".to_string(),
            subject: "s".to_string(),
            text: "t".to_string(),
            html: None,
        };
        NoopSender.send_email(&email).await.expect("noop send");
    }
}
