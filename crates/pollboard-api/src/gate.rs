//! Authentication and authorization for the admin pages

use crate::state::AppState;
use axum_extra::extract::CookieJar;
use chrono::Utc;
use pollboard_core::UserId;
use tracing::{debug, warn};

/// Outcome of the access check for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// No session, or the session is unknown or expired
    Anonymous,
    /// Logged in, but the profile does not grant poll management
    Denied {
        /// Identity behind the session
        user_id: UserId,
    },
    /// Logged in with a role that may manage polls
    Granted {
        /// Identity behind the session
        user_id: UserId,
    },
}

/// Resolve the identity behind the session cookie and check its role.
///
/// Store failures never grant access: a failed session lookup counts as
/// anonymous and a failed profile lookup as denied.
pub async fn check(state: &AppState, jar: &CookieJar) -> Access {
    let Some(cookie) = jar.get(&state.config.session.cookie_name) else {
        debug!("No session cookie on request");
        return Access::Anonymous;
    };

    let user_id = match state
        .sessions
        .find_active_session(cookie.value(), Utc::now())
        .await
    {
        Ok(Some(user_id)) => user_id,
        Ok(None) => {
            debug!("Session unknown or expired");
            return Access::Anonymous;
        }
        Err(e) => {
            warn!("Session lookup failed: {}", e);
            return Access::Anonymous;
        }
    };

    match state.profiles.find_profile(&user_id).await {
        Ok(Some(profile)) if profile.role.can_manage_polls() => Access::Granted { user_id },
        Ok(Some(profile)) => {
            debug!(user_id = %user_id, role = %profile.role, "Role may not manage polls");
            Access::Denied { user_id }
        }
        Ok(None) => {
            debug!(user_id = %user_id, "No profile for identity");
            Access::Denied { user_id }
        }
        Err(e) => {
            warn!(user_id = %user_id, "Profile lookup failed: {}", e);
            Access::Denied { user_id }
        }
    }
}
