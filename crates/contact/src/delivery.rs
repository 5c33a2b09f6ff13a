use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ContactDraft;

pub const DELIVERY_FALLBACK_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly via email.";
pub const INVALID_CONFIG_MESSAGE: &str =
    "Email configuration is invalid. Please verify Service ID, Template ID, and Public Key.";

const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com";
const REQUEST_TIMEOUT_SECS: u64 = 20;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// Credentials are missing or do not have the expected shape.
    #[error("email configuration is invalid")]
    Config,

    /// The request never produced a response.
    #[error("delivery request failed: {0}")]
    Request(String),

    /// The collaborator answered with something other than 200.
    #[error("delivery rejected with status {status}")]
    Rejected { status: u16, text: String },
}

impl DeliveryError {
    /// Text shown in the error banner. Prefers what the collaborator said.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config => INVALID_CONFIG_MESSAGE.to_owned(),
            Self::Rejected { text, .. } if !text.trim().is_empty() => text.trim().to_owned(),
            _ => DELIVERY_FALLBACK_MESSAGE.to_owned(),
        }
    }
}

/// Parameters handed to the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

impl OutgoingMessage {
    pub fn new(draft: ContactDraft, to_name: impl Into<String>) -> Self {
        Self {
            from_name: draft.name,
            reply_to: draft.email.to_owned(),
            from_email: draft.email,
            subject: draft.subject,
            message: draft.message,
            to_name: to_name.into(),
        }
    }
}

/// Delivers a contact message through a remote email service.
#[async_trait::async_trait]
pub trait Deliver: Send + Sync {
    async fn deliver_message(&self, message: &OutgoingMessage) -> Result<(), DeliveryError>;
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    /// Optional access token for accounts that require it on REST calls.
    #[serde(default)]
    pub private_key: Option<String>,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_emailjs_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
        }
    }
}

fn default_emailjs_endpoint() -> String {
    DEFAULT_EMAILJS_ENDPOINT.to_owned()
}

impl EmailJsConfig {
    pub fn check(&self) -> Result<(), DeliveryError> {
        let looks_invalid = !self.service_id.starts_with("service_")
            || !self.template_id.starts_with("template_")
            || self.public_key.trim().is_empty();

        if looks_invalid {
            return Err(DeliveryError::Config);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a OutgoingMessage,
}

/// EmailJS REST client.
pub struct EmailJs {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJs {
    pub fn new(config: EmailJsConfig) -> crate::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, config })
    }

    fn send_url(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl Deliver for EmailJs {
    async fn deliver_message(&self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        self.config.check()?;

        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: message,
        };

        tracing::info!(
            service_id = %self.config.service_id,
            template_id = %self.config.template_id,
            "sending contact message"
        );

        let response = self
            .http
            .post(self.send_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        if status != 200 {
            return Err(DeliveryError::Rejected { status, text });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_abc".to_owned(),
            template_id: "template_abc".to_owned(),
            public_key: "pk_abc".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_check_accepts_well_formed_credentials() {
        assert!(config().check().is_ok());
    }

    #[test]
    fn test_check_rejects_malformed_credentials() {
        let cases = [
            EmailJsConfig {
                service_id: "abc".to_owned(),
                ..config()
            },
            EmailJsConfig {
                template_id: "tmpl_abc".to_owned(),
                ..config()
            },
            EmailJsConfig {
                public_key: " ".to_owned(),
                ..config()
            },
            EmailJsConfig::default(),
        ];

        for case in cases {
            assert!(matches!(case.check(), Err(DeliveryError::Config)));
        }
    }

    #[tokio::test]
    async fn test_invalid_config_fails_before_calling_out() {
        let client = EmailJs::new(EmailJsConfig {
            endpoint: "http://127.0.0.1:9".to_owned(),
            ..Default::default()
        })
        .unwrap();
        let message = OutgoingMessage::new(ContactDraft::default(), "Owner");

        let err = client.deliver_message(&message).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Config));
        assert_eq!(err.user_message(), INVALID_CONFIG_MESSAGE);
    }

    #[test]
    fn test_user_message_prefers_collaborator_text() {
        let rejected = DeliveryError::Rejected {
            status: 400,
            text: "The Public Key is invalid".to_owned(),
        };
        assert_eq!(rejected.user_message(), "The Public Key is invalid");

        let silent = DeliveryError::Rejected {
            status: 500,
            text: String::new(),
        };
        assert_eq!(silent.user_message(), DELIVERY_FALLBACK_MESSAGE);

        let network = DeliveryError::Request("connection refused".to_owned());
        assert_eq!(network.user_message(), DELIVERY_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_outgoing_message_uses_email_as_reply_to() {
        let message = OutgoingMessage::new(
            ContactDraft {
                name: "Ada".to_owned(),
                email: "ada@example.com".to_owned(),
                subject: "Hi".to_owned(),
                message: "Body".to_owned(),
            },
            "Owner",
        );

        assert_eq!(message.reply_to, "ada@example.com");
        assert_eq!(message.from_email, "ada@example.com");
        assert_eq!(message.to_name, "Owner");

        let params = serde_json::to_value(&message).unwrap();
        assert_eq!(params["from_name"], "Ada");
        assert_eq!(params["subject"], "Hi");
    }
}
