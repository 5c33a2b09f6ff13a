use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use folio_contact::{
    AssistError, ContactSession, Deliver, DeliveryError, DraftEmail, DraftRequest, Field,
    OutgoingMessage,
};
use tokio::sync::Semaphore;

/// Records every message and answers with a fixed outcome. When `gate` is
/// set, each call waits for a permit before answering.
pub struct FakeDeliverer {
    outcome: fn() -> Result<(), DeliveryError>,
    calls: AtomicUsize,
    sent: Mutex<Vec<OutgoingMessage>>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeDeliverer {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::new(|| Ok(())))
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self::new(|| {
            Err(DeliveryError::Rejected {
                status: 400,
                text: "The template ID is invalid".to_owned(),
            })
        }))
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::new(|| {
            Err(DeliveryError::Request("connection reset".to_owned()))
        }))
    }

    pub fn gated(gate: Arc<Semaphore>) -> Arc<Self> {
        Arc::new(Self {
            gate: Some(gate),
            ..Self::new(|| Ok(()))
        })
    }

    fn new(outcome: fn() -> Result<(), DeliveryError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            sent: Mutex::new(vec![]),
            gate: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Deliver for FakeDeliverer {
    async fn deliver_message(&self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(message.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        (self.outcome)()
    }
}

/// Answers every request with the same text, or fails when built with
/// [`FakeDrafter::failing`]. A gated drafter waits for a permit first.
pub struct FakeDrafter {
    reply: Option<String>,
    requests: Mutex<Vec<DraftRequest>>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeDrafter {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(Some(text.into())))
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::new(None))
    }

    pub fn gated(text: impl Into<String>, gate: Arc<Semaphore>) -> Arc<Self> {
        Arc::new(Self {
            gate: Some(gate),
            ..Self::new(Some(text.into()))
        })
    }

    fn new(reply: Option<String>) -> Self {
        Self {
            reply,
            requests: Mutex::new(vec![]),
            gate: None,
        }
    }

    pub fn requests(&self) -> Vec<DraftRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DraftEmail for FakeDrafter {
    async fn draft_email(&self, request: &DraftRequest) -> Result<String, AssistError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        match &self.reply {
            Some(text) => Ok(text.to_owned()),
            None => Err(AssistError::Response {
                status: 503,
                body: "overloaded".to_owned(),
            }),
        }
    }
}

pub async fn filled_session() -> ContactSession {
    let session = ContactSession::new();
    session
        .update(|form| {
            form.set_field(Field::Name, "Ada Lovelace");
            form.set_field(Field::Email, "ada@example.com");
            form.set_field(Field::Subject, "Engines");
            form.set_field(Field::Message, "Shall we compute?");
            form.set_purpose("ask about the analytical engine");
        })
        .await;

    session
}
