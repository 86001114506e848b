//! Askama templates for the admin pages

use askama::Template;
use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use pollboard_core::Poll;
use std::fmt::Write as _;
use tracing::error;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// One poll as shown on the admin page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollCard {
    /// Poll id, also posted back by the delete form
    pub id: String,
    /// Question text
    pub question: String,
    /// Owning identity
    pub user_id: String,
    /// Creation date, already formatted
    pub created_on: String,
    /// Options in stored order
    pub options: Vec<String>,
}

impl PollCard {
    /// Build a card, formatting the creation date with `date_format`
    #[must_use]
    pub fn from_poll(poll: Poll, date_format: &str) -> Self {
        Self {
            created_on: format_date(poll.created_at, date_format),
            id: poll.id.to_string(),
            question: poll.question,
            user_id: poll.user_id.to_string(),
            options: poll.options,
        }
    }
}

/// Poll listing shown to admins
#[derive(Template)]
#[template(path = "admin/polls.html")]
pub struct AdminPageTemplate {
    /// Cards, newest first
    pub polls: Vec<PollCard>,
    /// Target of every delete form
    pub delete_action: String,
}

/// Shown to signed-in identities without the admin role
#[derive(Template, Default)]
#[template(path = "admin/denied.html")]
pub struct AccessDeniedTemplate;

/// Single-message failure view
#[derive(Template)]
#[template(path = "admin/error.html")]
pub struct ErrorTemplate {
    /// Text shown in place of the page
    pub message: String,
}

impl ErrorTemplate {
    /// Error view showing `message`
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Render a template into an HTML response with the given status.
///
/// Admin pages are never served from a shared cache.
pub fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(body) => (
            status,
            [(header::CACHE_CONTROL, "no-store")],
            Html(body),
        )
            .into_response(),
        Err(e) => {
            error!("Template render failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("Template error: {e}")),
            )
                .into_response()
        }
    }
}

/// Format a UTC timestamp as a date. An unusable pattern falls back to
/// ISO `YYYY-MM-DD` instead of failing the page.
#[must_use]
pub fn format_date(at: DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_ok() {
        return out;
    }
    at.format(FALLBACK_DATE_FORMAT).to_string()
}
