use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    /// Primary subtag of the visitor's preferred language, `value` when the
    /// request carried none.
    #[askama::filter_fn]
    pub fn lang(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        Ok(
            askama::get_value::<String>(values, "preferred_language_iso")
                .map(|lang| lang.to_owned())
                .unwrap_or_else(|_| value.to_owned()),
        )
    }
}

pub struct Template {
    pub preferred_language_iso: String,
}

impl Template {
    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "preferred_language_iso",
            Box::new(self.preferred_language_iso.to_owned()),
        );

        template.render_with_values(&values)
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match self.render_with_values(template) {
            Ok(html) => html,
            Err(err) => {
                tracing::error!("Failed to render template. Error: {err}");
                SERVER_ERROR_MESSAGE.to_owned()
            }
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template. Error: {err}");

                let html = self
                    .render_with_values(ServerTemplate)
                    .unwrap_or_else(|_| SERVER_ERROR_MESSAGE.to_owned());

                (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
            }
        }
    }
}

/// First language tag of `Accept-Language`, reduced to its primary subtag.
fn preferred_language_iso(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(header::ACCEPT_LANGUAGE)?.to_str().ok()?;
    let tag = header.split(',').next()?.split(';').next()?.trim();
    let primary = tag.split('-').next()?;

    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(primary.to_ascii_lowercase())
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template {
            preferred_language_iso: preferred_language_iso(parts).unwrap_or_else(|| "en".to_owned()),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;
