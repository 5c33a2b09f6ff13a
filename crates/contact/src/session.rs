use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    AssistError, ContactForm, DELIVERY_FALLBACK_MESSAGE, Deliver, DeliveryError, DraftEmail,
    FieldErrors, OutgoingMessage, SubmitRejection, Tick,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(String),
    Invalid(FieldErrors),
    /// Another submission was still in flight; nothing was sent.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Drafted,
    Failed(String),
    /// Blank purpose, or a draft or submission already running.
    Skipped,
}

/// The contact form of one page view, shared between requests.
///
/// The form lock is never held across a collaborator call. Status resets run
/// on their own tasks and only apply while their tick is current.
#[derive(Clone, Default)]
pub struct ContactSession {
    form: Arc<Mutex<ContactForm>>,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read<R>(&self, f: impl FnOnce(&ContactForm) -> R) -> R {
        f(&*self.form.lock().await)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut *self.form.lock().await)
    }

    /// Validates, delivers and schedules the return to idle.
    ///
    /// The exchange runs on its own task so a dropped request cannot leave
    /// the form stuck in `loading`.
    pub async fn submit(&self, deliverer: Arc<dyn Deliver>, recipient_name: &str) -> SubmitOutcome {
        let begun = self.form.lock().await.begin_submit();
        let draft = match begun {
            Ok(draft) => draft,
            Err(SubmitRejection::Busy) => {
                tracing::debug!("submission already in flight");
                return SubmitOutcome::Busy;
            }
            Err(SubmitRejection::Invalid(errors)) => return SubmitOutcome::Invalid(errors),
        };

        let message = OutgoingMessage::new(draft, recipient_name);
        let session = self.clone();
        let task = tokio::spawn(async move {
            let result = deliverer.deliver_message(&message).await;
            session.finish_submit(result).await
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!("contact delivery task failed: {err}");
                self.finish_submit(Err(DeliveryError::Request(err.to_string())))
                    .await;

                SubmitOutcome::Failed(DELIVERY_FALLBACK_MESSAGE.to_owned())
            }
        }
    }

    async fn finish_submit(&self, result: Result<(), DeliveryError>) -> SubmitOutcome {
        let outcome = match &result {
            Ok(()) => {
                tracing::info!("contact message delivered");
                SubmitOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!("contact delivery failed: {err}");
                SubmitOutcome::Failed(err.user_message())
            }
        };

        let tick = self.form.lock().await.finish_submit(result);
        self.schedule_reset(tick);

        outcome
    }

    /// Asks the assistant for a draft and applies it to the form. A missing
    /// assistant fails the same way a remote error does.
    pub async fn generate(&self, drafter: Option<Arc<dyn DraftEmail>>) -> GenerateOutcome {
        let Some(request) = self.form.lock().await.begin_generate() else {
            return GenerateOutcome::Skipped;
        };

        let session = self.clone();
        let task = tokio::spawn(async move {
            let result = match drafter {
                Some(drafter) => drafter.draft_email(&request).await,
                None => Err(AssistError::NotConfigured),
            };
            session.finish_generate(result).await
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!("draft task failed: {err}");
                self.finish_generate(Err(AssistError::Request(err.to_string())))
                    .await
            }
        }
    }

    async fn finish_generate(&self, result: Result<String, AssistError>) -> GenerateOutcome {
        let outcome = match &result {
            Ok(_) => GenerateOutcome::Drafted,
            Err(err) => {
                tracing::warn!("draft generation failed: {err}");
                GenerateOutcome::Failed(err.user_message())
            }
        };

        let tick = self.form.lock().await.finish_generate(result);
        if let Some(tick) = tick {
            self.schedule_reset(tick);
        }

        outcome
    }

    fn schedule_reset(&self, tick: Tick) {
        let form = self.form.clone();
        tokio::spawn(async move {
            tokio::time::sleep(tick.after).await;
            if form.lock().await.expire_status(tick.token) {
                tracing::debug!("contact status returned to idle");
            }
        });
    }
}
