//! Database query operations for the pollboard service

use crate::models::{PollDb, ProfileDb, SessionDb};
use chrono::{DateTime, Utc};
use pollboard_core::{Error, Result};
use sqlx::PgPool;

/// Poll database operations
#[derive(Debug)]
pub struct PollQueries;

impl PollQueries {
    /// List every poll, newest first. Equal timestamps fall back to id order
    /// so repeated reads agree.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<PollDb>> {
        let query = r"
            SELECT id, question, user_id, created_at, options
            FROM polls
            ORDER BY created_at DESC, id ASC
        ";

        let rows = sqlx::query_as::<_, PollDb>(query)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                tracing::error!("Database query error in list_newest_first: {}", e);
                Error::Database(e.to_string())
            })?;

        tracing::debug!("list_newest_first returned {} polls", rows.len());
        Ok(rows)
    }

    /// Delete a poll by id, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete_by_id(pool: &PgPool, id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM polls WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Insert a poll and return the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(
        pool: &PgPool,
        question: &str,
        user_id: &str,
        created_at: DateTime<Utc>,
        options: &[String],
    ) -> Result<PollDb> {
        let query = r"
            INSERT INTO polls (question, user_id, created_at, options)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, user_id, created_at, options
        ";

        sqlx::query_as::<_, PollDb>(query)
            .bind(question)
            .bind(user_id)
            .bind(created_at)
            .bind(options)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Profile database operations
#[derive(Debug)]
pub struct ProfileQueries;

impl ProfileQueries {
    /// Find a profile by identity id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<ProfileDb>> {
        sqlx::query_as::<_, ProfileDb>("SELECT id, role, created_at FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Create a profile or replace its role
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn upsert(pool: &PgPool, id: &str, role: &str) -> Result<ProfileDb> {
        let query = r"
            INSERT INTO profiles (id, role)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET role = EXCLUDED.role
            RETURNING id, role, created_at
        ";

        sqlx::query_as::<_, ProfileDb>(query)
            .bind(id)
            .bind(role)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Session database operations
#[derive(Debug)]
pub struct SessionQueries;

impl SessionQueries {
    /// Find a session that has not expired at `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_active(
        pool: &PgPool,
        session_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionDb>> {
        let query = r"
            SELECT session_id, user_id, created_at, expires_at
            FROM sessions
            WHERE session_id = $1 AND expires_at > $2
        ";

        sqlx::query_as::<_, SessionDb>(query)
            .bind(session_id)
            .bind(now)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Store a session
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(
        pool: &PgPool,
        session_id: &str,
        user_id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<SessionDb> {
        let query = r"
            INSERT INTO sessions (session_id, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING session_id, user_id, created_at, expires_at
        ";

        sqlx::query_as::<_, SessionDb>(query)
            .bind(session_id)
            .bind(user_id)
            .bind(expires_at)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }
}
