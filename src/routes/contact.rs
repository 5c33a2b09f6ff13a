use std::{convert::Infallible, str::FromStr, time::Duration};

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use folio_contact::{
    ContactForm, ContactSession, DRAFT_ERROR_RESET_AFTER, Field, FieldErrors, GenerateOutcome,
    STATUS_RESET_AFTER, Status, SubmitOutcome, Tone,
    placeholder::{EXAMPLE_PROMPTS, Placeholder, frames},
};
use futures::{Stream, StreamExt};
use serde::Deserialize;
use strum::VariantArray;

use crate::{routes::AppState, template::Template};

/// How soon the browser re-fetches a form whose banner was rendered without
/// a known deadline, e.g. after a reload.
const STATUS_POLL_AFTER: Duration = Duration::from_secs(1);

pub struct ToneOption {
    pub value: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate<'a> {
    pub view: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub purpose: &'a str,
    pub tones: Vec<ToneOption>,
    pub errors: FieldErrors,
    pub status: Status,
    pub status_message: Option<&'a str>,
    pub loading: bool,
    pub generating: bool,
    pub assistant: bool,
    pub owner_email: &'a str,
    /// Milliseconds after which the browser should re-fetch the form.
    pub refresh_after: Option<u128>,
}

impl<'a> ContactFormTemplate<'a> {
    pub fn new(
        view: &'a str,
        form: &'a ContactForm,
        app_state: &'a AppState,
        refresh_after: Option<Duration>,
    ) -> Self {
        let draft = form.draft();
        let refresh_after = match form.status() {
            Status::Idle => None,
            _ => Some(refresh_after.unwrap_or(STATUS_POLL_AFTER).as_millis()),
        };

        Self {
            view,
            name: &draft.name,
            email: &draft.email,
            subject: &draft.subject,
            message: &draft.message,
            purpose: form.purpose(),
            tones: Tone::VARIANTS
                .iter()
                .map(|tone| ToneOption {
                    value: tone.as_ref(),
                    selected: *tone == form.tone(),
                })
                .collect(),
            errors: form.visible_errors(),
            status: form.status(),
            status_message: form.message(),
            loading: form.is_loading(),
            generating: form.is_generating(),
            assistant: app_state.assistant.is_some(),
            owner_email: &app_state.config.contact.owner_email,
            refresh_after,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-expired.html")]
pub struct ContactExpiredTemplate;

/// Form body shared by every contact action. Absent keys leave the
/// corresponding state alone.
#[derive(Deserialize, Default)]
pub struct FieldsInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub purpose: Option<String>,
    pub tone: Option<String>,
}

impl FieldsInput {
    fn apply(self, form: &mut ContactForm) {
        for (field, value) in [
            (Field::Name, self.name),
            (Field::Email, self.email),
            (Field::Subject, self.subject),
            (Field::Message, self.message),
        ] {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }

        if let Some(purpose) = self.purpose {
            form.set_purpose(purpose);
        }

        match self.tone.as_deref().map(Tone::from_str) {
            Some(Ok(tone)) => {
                form.set_tone(tone);
            }
            Some(Err(_)) => tracing::debug!("ignoring unknown tone"),
            None => {}
        }
    }
}

async fn find_view(
    app_state: &AppState,
    view: &str,
    template: &Template,
) -> Result<ContactSession, Response> {
    match app_state.views.get(view).await {
        Some(session) => Ok(session),
        None => {
            Err((StatusCode::NOT_FOUND, template.render(ContactExpiredTemplate)).into_response())
        }
    }
}

async fn render_form(
    template: &Template,
    app_state: &AppState,
    view: &str,
    session: &ContactSession,
    refresh_after: Option<Duration>,
) -> Response {
    session
        .read(|form| {
            template.render(ContactFormTemplate::new(
                view,
                form,
                app_state,
                refresh_after,
            ))
        })
        .await
}

pub async fn form(
    template: Template,
    State(app_state): State<AppState>,
    Path(view): Path<String>,
) -> impl IntoResponse {
    let session = match find_view(&app_state, &view, &template).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    render_form(&template, &app_state, &view, &session, None).await
}

pub async fn fields(
    template: Template,
    State(app_state): State<AppState>,
    Path(view): Path<String>,
    Form(input): Form<FieldsInput>,
) -> impl IntoResponse {
    let session = match find_view(&app_state, &view, &template).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    session.update(|form| input.apply(form)).await;

    render_form(&template, &app_state, &view, &session, None).await
}

pub async fn submit(
    template: Template,
    State(app_state): State<AppState>,
    Path(view): Path<String>,
    Form(input): Form<FieldsInput>,
) -> impl IntoResponse {
    let session = match find_view(&app_state, &view, &template).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    session.update(|form| input.apply(form)).await;

    let outcome = session
        .submit(
            app_state.deliverer.clone(),
            &app_state.config.contact.recipient_name,
        )
        .await;

    let refresh_after = match outcome {
        SubmitOutcome::Delivered | SubmitOutcome::Failed(_) => Some(STATUS_RESET_AFTER),
        SubmitOutcome::Invalid(_) | SubmitOutcome::Busy => None,
    };

    render_form(&template, &app_state, &view, &session, refresh_after).await
}

pub async fn draft(
    template: Template,
    State(app_state): State<AppState>,
    Path(view): Path<String>,
    Form(input): Form<FieldsInput>,
) -> impl IntoResponse {
    let session = match find_view(&app_state, &view, &template).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    session.update(|form| input.apply(form)).await;

    let outcome = session.generate(app_state.assistant.clone()).await;
    let refresh_after = match outcome {
        GenerateOutcome::Failed(_) => Some(DRAFT_ERROR_RESET_AFTER),
        GenerateOutcome::Drafted | GenerateOutcome::Skipped => None,
    };

    render_form(&template, &app_state, &view, &session, refresh_after).await
}

/// GET /contact/placeholder - rotating example prompts as Server-Sent Events
///
/// The browser closes the stream on the first keystroke; dropping it cancels
/// the pending animation step.
pub async fn placeholder() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = frames(Placeholder::new(EXAMPLE_PROMPTS.iter().copied()))
        .map(|text| Ok(Event::default().data(text)));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
