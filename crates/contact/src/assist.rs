use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DRAFT_FAILURE_MESSAGE: &str = "Could not generate email. Please try again later.";

const DEFAULT_SENDER_NAME: &str = "Visitor";
const DEFAULT_SENDER_EMAIL: &str = "visitor@example.com";
const SUBJECT_PREFIX: &str = "subject:";

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Concise,
    Detailed,
}

#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("draft assistant is not configured")]
    NotConfigured,

    #[error("draft request failed: {0}")]
    Request(String),

    #[error("draft response error: status {status}")]
    Response { status: u16, body: String },

    #[error("draft response parse failed: {0}")]
    Parse(String),

    #[error("draft response contained no text")]
    Empty,
}

impl AssistError {
    /// Generation failures all surface the same banner.
    pub fn user_message(&self) -> String {
        DRAFT_FAILURE_MESSAGE.to_owned()
    }
}

/// What the visitor wants to say, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRequest {
    pub purpose: String,
    pub sender_name: String,
    pub sender_email: String,
    pub tone: Tone,
}

impl DraftRequest {
    /// Blank sender details fall back to neutral placeholders.
    pub fn new(purpose: &str, sender_name: &str, sender_email: &str, tone: Tone) -> Self {
        let or_default = |value: &str, default: &str| {
            let value = value.trim();
            if value.is_empty() {
                default.to_owned()
            } else {
                value.to_owned()
            }
        };

        Self {
            purpose: purpose.trim().to_owned(),
            sender_name: or_default(sender_name, DEFAULT_SENDER_NAME),
            sender_email: or_default(sender_email, DEFAULT_SENDER_EMAIL),
            tone,
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            r#"You are an assistant that writes clear, well-structured emails.
Tone: {tone}
Sender: {name} <{email}>

Compose a short email that matches this purpose:
"""
{purpose}
"""

Requirements:
- 4-8 sentences
- Subject line first on a single line starting with: Subject:
- Use simple, direct language
- Add a polite closing with the sender name"#,
            tone = self.tone,
            name = self.sender_name,
            email = self.sender_email,
            purpose = self.purpose,
        )
    }
}

/// A generated block split into an optional subject line and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDraft {
    pub subject: Option<String>,
    pub body: String,
}

impl ParsedDraft {
    /// A first non-blank line starting with `Subject:` (any case) becomes the
    /// subject, the rest becomes the body. Otherwise the whole text is the body.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
        let first = first.trim();

        let has_subject = first
            .get(..SUBJECT_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SUBJECT_PREFIX));

        if !has_subject {
            return Self {
                subject: None,
                body: text.to_owned(),
            };
        }

        Self {
            subject: Some(first[SUBJECT_PREFIX.len()..].trim().to_owned()),
            body: rest.trim().to_owned(),
        }
    }
}

/// Drafts an email from a short description of its purpose.
#[async_trait::async_trait]
pub trait DraftEmail: Send + Sync {
    async fn draft_email(&self, request: &DraftRequest) -> Result<String, AssistError>;
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,
    /// Absent or blank disables drafting.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_gemini_endpoint(),
            api_key: None,
            model: default_gemini_model(),
        }
    }
}

fn default_gemini_endpoint() -> String {
    DEFAULT_GEMINI_ENDPOINT.to_owned()
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_owned()
}

impl GeminiConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Gemini `generateContent` client.
pub struct Gemini {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl Gemini {
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &GeminiConfig) -> crate::Result<Option<Self>> {
        let Some(api_key) = config.api_key() else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Some(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            model: config.model.to_owned(),
        }))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl DraftEmail for Gemini {
    async fn draft_email(&self, request: &DraftRequest) -> Result<String, AssistError> {
        let prompt = request.prompt();
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: &prompt }],
            }],
        };
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AssistError::Request(e.to_string()))?;

        if status != 200 {
            return Err(AssistError::Response { status, body: text });
        }

        extract_text(&text)
    }
}

fn extract_text(body: &str) -> Result<String, AssistError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| AssistError::Parse(e.to_string()))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(AssistError::Empty);
    }

    Ok(text.to_owned())
}
