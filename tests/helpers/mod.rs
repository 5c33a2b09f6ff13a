#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use folio::{
    AppState,
    config::{Config, ContactConfig, ObservabilityConfig, ServerConfig},
    views::ViewStore,
};
use folio_contact::{
    AssistError, Deliver, DeliveryError, DraftEmail, DraftRequest, EmailJsConfig, GeminiConfig,
    OutgoingMessage,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const RECIPIENT: &str = "Sidarth";

/// Records every message and answers with `outcome`.
pub struct FakeDeliverer {
    outcome: fn() -> Result<(), DeliveryError>,
    sent: Mutex<Vec<OutgoingMessage>>,
}

impl FakeDeliverer {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            outcome: || Ok(()),
            sent: Mutex::new(vec![]),
        })
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            outcome: || {
                Err(DeliveryError::Rejected {
                    status: 400,
                    text: "The template ID is invalid".to_owned(),
                })
            },
            sent: Mutex::new(vec![]),
        })
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Deliver for FakeDeliverer {
    async fn deliver_message(&self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());
        (self.outcome)()
    }
}

pub struct FakeDrafter {
    reply: String,
    requests: Mutex<Vec<DraftRequest>>,
}

impl FakeDrafter {
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            requests: Mutex::new(vec![]),
        })
    }

    pub fn requests(&self) -> Vec<DraftRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DraftEmail for FakeDrafter {
    async fn draft_email(&self, request: &DraftRequest) -> Result<String, AssistError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.reply.to_owned())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        contact: ContactConfig {
            recipient_name: RECIPIENT.to_string(),
            owner_email: "owner@example.com".to_string(),
        },
        emailjs: EmailJsConfig::default(),
        gemini: GeminiConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new(
        deliverer: Arc<dyn Deliver>,
        assistant: Option<Arc<dyn DraftEmail>>,
    ) -> Self {
        let state = AppState {
            config: test_config(),
            deliverer,
            assistant,
            views: ViewStore::default(),
        };

        Self {
            router: folio::routes::router(state.clone()),
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let body = serde_urlencoded::to_string(fields).unwrap();

        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Renders the page and returns the id of the contact view it opened.
    pub async fn open_view(&self) -> String {
        let response = self.get("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        let start = html.find("data-view=\"").expect("page carries a view id") + 11;

        html[start..start + 26].to_owned()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub const FILLED: &[(&str, &str)] = &[
    ("name", "Ada Lovelace"),
    ("email", "ada@example.com"),
    ("subject", "Engines"),
    ("message", "Shall we compute?"),
];
