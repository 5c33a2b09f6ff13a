use std::time::Duration;

use crate::{
    AssistError, ContactDraft, DeliveryError, DraftRequest, Field, FieldErrors, FieldFlags,
    ParsedDraft, Scheduler, Status, Tick, Token, Tone,
};

/// How long a submission outcome stays on screen.
pub const STATUS_RESET_AFTER: Duration = Duration::from_secs(5);

/// How long a drafting failure stays on screen.
pub const DRAFT_ERROR_RESET_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission or a draft is already in flight.
    Busy,
    Invalid(FieldErrors),
}

/// State of the contact form for one page view.
///
/// `idle -> loading -> {success, error} -> idle`, where the return edge is
/// driven by the [`Tick`] handed back from [`ContactForm::finish_submit`].
#[derive(Debug, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    purpose: String,
    tone: Tone,
    touched: FieldFlags,
    attempted: bool,
    status: Status,
    message: Option<String>,
    loading: bool,
    generating: bool,
    status_timer: Scheduler,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Records a user edit. Ignored while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.loading {
            return false;
        }

        let value = value.into();
        if self.draft.get(field) == value {
            return false;
        }

        self.draft.set(field, value);
        self.touched.set(field, true);

        true
    }

    pub fn set_purpose(&mut self, purpose: impl Into<String>) -> bool {
        if self.loading || self.generating {
            return false;
        }

        self.purpose = purpose.into();

        true
    }

    pub fn set_tone(&mut self, tone: Tone) -> bool {
        if self.loading || self.generating {
            return false;
        }

        self.tone = tone;

        true
    }

    /// Errors the user should see: every failing field after a submit
    /// attempt, otherwise only the failing fields they have edited.
    pub fn visible_errors(&self) -> FieldErrors {
        let errors = self.draft.field_errors();
        if self.attempted {
            return errors;
        }

        errors.masked_by(&self.touched)
    }

    /// Validates and enters `loading`. The returned draft is what must be
    /// delivered; the caller reports back through [`Self::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<ContactDraft, SubmitRejection> {
        if self.loading || self.generating {
            return Err(SubmitRejection::Busy);
        }

        self.attempted = true;

        let errors = self.draft.field_errors();
        if errors.any() {
            return Err(SubmitRejection::Invalid(errors));
        }

        self.loading = true;
        self.status = Status::Idle;
        self.message = None;
        self.status_timer.cancel();

        Ok(self.draft.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), DeliveryError>) -> Tick {
        self.loading = false;

        match result {
            Ok(()) => {
                self.status = Status::Success;
                self.message = None;
                self.draft.clear();
                self.purpose.clear();
                self.touched = FieldFlags::default();
                self.attempted = false;
            }
            Err(err) => {
                self.status = Status::Error;
                self.message = Some(err.user_message());
            }
        }

        self.status_timer.tick(STATUS_RESET_AFTER)
    }

    /// Returns `None` when there is nothing to draft or a request is already
    /// running.
    pub fn begin_generate(&mut self) -> Option<DraftRequest> {
        if self.loading || self.generating || self.purpose.trim().is_empty() {
            return None;
        }

        self.generating = true;

        Some(DraftRequest::new(
            &self.purpose,
            &self.draft.name,
            &self.draft.email,
            self.tone,
        ))
    }

    /// Applies a generated draft. Failures leave the fields untouched and
    /// return the tick that clears the error banner.
    pub fn finish_generate(&mut self, result: Result<String, AssistError>) -> Option<Tick> {
        self.generating = false;

        match result {
            Ok(text) => {
                let parsed = ParsedDraft::parse(&text);
                if let Some(subject) = parsed.subject {
                    self.draft.subject = subject;
                }
                self.draft.message = parsed.body;

                None
            }
            Err(err) => {
                self.status = Status::Error;
                self.message = Some(err.user_message());

                Some(self.status_timer.tick(DRAFT_ERROR_RESET_AFTER))
            }
        }
    }

    /// Returns the status to idle unless a newer outcome replaced the one
    /// `token` was issued for.
    pub fn expire_status(&mut self, token: Token) -> bool {
        if !self.status_timer.is_current(token) {
            return false;
        }

        self.status = Status::Idle;
        self.message = None;

        true
    }
}
