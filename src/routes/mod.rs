use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use folio_contact::{Deliver, DraftEmail};

use crate::{
    template::{NotFoundTemplate, Template},
    views::ViewStore,
};

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub deliverer: Arc<dyn Deliver>,
    /// `None` when no Gemini key is configured.
    pub assistant: Option<Arc<dyn DraftEmail>>,
    pub views: ViewStore,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/contact/placeholder", get(contact::placeholder))
        .route("/contact/{view}", get(contact::form))
        .route("/contact/{view}/fields", post(contact::fields))
        .route("/contact/{view}/submit", post(contact::submit))
        .route("/contact/{view}/draft", post(contact::draft))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
