//! Database models for the pollboard service

use chrono::{DateTime, Utc};
use pollboard_core::{Poll, PollId, Profile, Role, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for polls
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PollDb {
    /// Unique identifier
    pub id: String,

    /// Question text
    pub question: String,

    /// Owning profile
    pub user_id: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Options in display order
    pub options: Vec<String>,
}

/// Database model for profiles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileDb {
    /// Identity id
    pub id: String,

    /// Stored role text
    pub role: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Database model for login sessions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionDb {
    /// Cookie value
    pub session_id: String,

    /// Identity the session belongs to
    pub user_id: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Expiry timestamp
    pub expires_at: DateTime<Utc>,
}

impl From<PollDb> for Poll {
    fn from(row: PollDb) -> Self {
        Self {
            id: PollId::new(row.id),
            question: row.question,
            user_id: UserId::new(row.user_id),
            created_at: row.created_at,
            options: row.options,
        }
    }
}

impl From<ProfileDb> for Profile {
    fn from(row: ProfileDb) -> Self {
        Self {
            role: Role::parse(&row.role),
            id: UserId::new(row.id),
        }
    }
}
