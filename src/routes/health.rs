use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// The site serves pages without its collaborators, so this is always 200.
/// The body reports whether email delivery and drafting are usable.
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    let delivery = app_state.config.emailjs.check().is_ok();
    if !delivery {
        tracing::warn!("Readiness check: email delivery is not configured");
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "delivery": delivery,
            "assistant": app_state.assistant.is_some(),
            "views": app_state.views.len().await,
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
