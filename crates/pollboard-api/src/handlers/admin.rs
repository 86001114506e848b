//! Admin pages: poll listing and deletion

use crate::{
    cache::ViewCache,
    gate::{self, Access},
    state::AppState,
    views::{self, AccessDeniedTemplate, AdminPageTemplate, ErrorTemplate, PollCard},
};
use axum::{
    Form,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use pollboard_core::{DeletePoll, DeletePollRequest, Result};
use pollboard_database::PollStore;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Path of the poll listing; also the path invalidated after a delete
pub const ADMIN_PATH: &str = "/admin";

/// Target of the delete form on every poll card
pub const DELETE_PATH: &str = "/admin/polls/delete";

/// Render every poll for an admin
pub async fn admin_page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let user_id = match gate::check(&state, &jar).await {
        Access::Granted { user_id } => user_id,
        denied => return refuse(&state, &denied),
    };

    let polls = match state.polls.list_polls().await {
        Ok(polls) => polls,
        Err(e) => {
            error!(user_id = %user_id, "Failed to load polls: {}", e);
            return views::render(StatusCode::OK, &ErrorTemplate::new("Error loading polls."));
        }
    };

    debug!(user_id = %user_id, count = polls.len(), "Rendering admin page");

    let date_format = &state.config.display.date_format;
    let page = AdminPageTemplate {
        polls: polls
            .into_iter()
            .map(|poll| PollCard::from_poll(poll, date_format))
            .collect(),
        delete_action: DELETE_PATH.to_string(),
    };

    let mut response = views::render(StatusCode::OK, &page);
    if let Ok(etag) = HeaderValue::from_str(&page_etag(state.view_cache.as_ref(), ADMIN_PATH)) {
        response.headers_mut().insert(header::ETAG, etag);
    }
    response
}

/// Handle the delete form posted from a poll card
///
/// A missing or empty `pollId` is ignored. Either way the browser is sent
/// back to the listing.
pub async fn delete_poll(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    form: Option<Form<DeletePollRequest>>,
) -> Response {
    let user_id = match gate::check(&state, &jar).await {
        Access::Granted { user_id } => user_id,
        denied => return refuse(&state, &denied),
    };

    let request = form.map(|Form(request)| request).unwrap_or_default();
    let command = match DeletePoll::try_from(request) {
        Ok(command) => command,
        Err(e) => {
            debug!(user_id = %user_id, "Ignoring delete request: {}", e);
            return Redirect::to(ADMIN_PATH).into_response();
        }
    };

    if let Err(e) = execute_delete(state.polls.as_ref(), state.view_cache.as_ref(), &command).await
    {
        error!(user_id = %user_id, poll_id = %command.id, "Failed to delete poll: {}", e);
        return views::render(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ErrorTemplate::new("Error deleting poll."),
        );
    }

    info!(user_id = %user_id, poll_id = %command.id, "Poll deleted");
    Redirect::to(ADMIN_PATH).into_response()
}

/// Remove one poll and mark the listing stale.
///
/// The listing is only invalidated once the store reports success. Removing
/// a poll that is already gone counts as success.
///
/// # Errors
///
/// Returns the store error unchanged.
pub async fn execute_delete(
    polls: &dyn PollStore,
    view_cache: &dyn ViewCache,
    command: &DeletePoll,
) -> Result<()> {
    if !polls.delete_poll(&command.id).await? {
        debug!(poll_id = %command.id, "Poll already gone");
    }
    view_cache.invalidate(ADMIN_PATH);
    Ok(())
}

/// Weak validator for the current generation of `path`
#[must_use]
pub fn page_etag(view_cache: &dyn ViewCache, path: &str) -> String {
    format!("W/\"{}-{}\"", path, view_cache.generation(path))
}

fn refuse(state: &AppState, access: &Access) -> Response {
    match access {
        Access::Denied { user_id } => {
            info!(user_id = %user_id, "Admin access denied");
            views::render(StatusCode::OK, &AccessDeniedTemplate)
        }
        _ => Redirect::to(&state.config.session.login_path).into_response(),
    }
}
