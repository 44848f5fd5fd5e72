use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

pub(crate) mod filters {
    use time::OffsetDateTime;

    #[askama::filter_fn]
    pub fn relative_time(value: &OffsetDateTime, _values: &dyn askama::Values) -> askama::Result<String> {
        let now = OffsetDateTime::now_utc();

        if *value > now {
            return Ok("just now".to_string());
        }

        let diff = (now - *value).whole_seconds() as u64;
        let minutes = diff / 60;
        let hours = diff / 3600;
        let days = diff / 86400;

        let value = match diff {
            s if s < 60 => "just now".to_string(),
            s if s < 3600 => {
                if minutes == 1 {
                    "1 minute ago".to_string()
                } else {
                    format!("{minutes} minutes ago")
                }
            }
            s if s < 86400 => {
                if hours == 1 {
                    "1 hour ago".to_string()
                } else {
                    format!("{hours} hours ago")
                }
            }
            s if s < 172800 => "yesterday".to_string(),
            s if s < 604800 => format!("{days} days ago"),
            s if s < 2592000 => {
                let weeks = days / 7;
                if weeks == 1 {
                    "1 week ago".to_string()
                } else {
                    format!("{weeks} weeks ago")
                }
            }
            _ => {
                let months = days / 30;
                if months <= 1 {
                    "1 month ago".to_string()
                } else {
                    format!("{months} months ago")
                }
            }
        };

        Ok(value)
    }
}

/// Render helper extracted per request.
///
/// Centralizes the failure path: a template that fails to render becomes a
/// logged 500 instead of a panic in the handler.
pub struct Template;

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong, please retry later",
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template)
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
