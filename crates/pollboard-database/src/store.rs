//! Store seams consumed by the admin pages
//!
//! Handlers depend on these traits rather than on `PgPool` so the page logic
//! can be driven against any backing store. [`PgStore`] is the production
//! implementation.

use crate::queries::{PollQueries, ProfileQueries, SessionQueries};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pollboard_core::{Poll, PollId, Profile, Result, UserId};
use sqlx::PgPool;

/// Resolves a session cookie value to the identity it belongs to
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Identity for an unexpired session, if any
    async fn find_active_session(
        &self,
        session_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserId>>;
}

/// Looks up profile metadata by identity
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// At most one profile for the identity
    async fn find_profile(&self, user_id: &UserId) -> Result<Option<Profile>>;
}

/// Reads and removes polls
#[async_trait]
pub trait PollStore: Send + Sync {
    /// Every poll, ordered by `created_at` descending
    async fn list_polls(&self) -> Result<Vec<Poll>>;

    /// Remove a poll. Returns `false` when no poll had that id.
    async fn delete_poll(&self, id: &PollId) -> Result<bool>;
}

/// Postgres-backed implementation of every store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap a connection pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SessionStore for PgStore {
    async fn find_active_session(
        &self,
        session_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserId>> {
        let session = SessionQueries::find_active(&self.pool, session_id, now).await?;
        Ok(session.map(|s| UserId::new(s.user_id)))
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn find_profile(&self, user_id: &UserId) -> Result<Option<Profile>> {
        let profile = ProfileQueries::find_by_id(&self.pool, user_id.as_str()).await?;
        Ok(profile.map(Profile::from))
    }
}

#[async_trait]
impl PollStore for PgStore {
    async fn list_polls(&self) -> Result<Vec<Poll>> {
        let rows = PollQueries::list_newest_first(&self.pool).await?;
        Ok(rows.into_iter().map(Poll::from).collect())
    }

    async fn delete_poll(&self, id: &PollId) -> Result<bool> {
        let removed = PollQueries::delete_by_id(&self.pool, id.as_str()).await?;
        Ok(removed > 0)
    }
}
