//! Core data types for the pollboard service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Opaque poll identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollId(String);

impl PollId {
    /// Wrap a stored identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity (account) identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a stored identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role classification stored on a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// May view and manage every poll
    Admin,
    /// Regular account
    User,
    /// A stored value this service does not know about
    Unrecognized(String),
}

impl Role {
    /// Parse the stored role text. Matching is exact: `"Admin"` or
    /// `" admin"` are not the admin role.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "user" => Self::User,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Whether this role may list and delete every poll
    #[must_use]
    pub const fn can_manage_polls(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Stored text for this role
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question with an ordered set of options, owned by an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    /// Unique identifier
    pub id: PollId,
    /// Question text
    pub question: String,
    /// Owning identity
    pub user_id: UserId,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Selectable choices, in display order
    pub options: Vec<String>,
}

/// Profile metadata for an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Identity this profile belongs to
    pub id: UserId,
    /// Role classification
    pub role: Role,
}

/// Delete form submitted from a poll card
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DeletePollRequest {
    /// Poll to delete
    #[serde(rename = "pollId", default)]
    #[validate(length(min = 1))]
    pub poll_id: Option<String>,
}

/// Validated delete command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePoll {
    /// Poll to delete
    pub id: PollId,
}

impl TryFrom<DeletePollRequest> for DeletePoll {
    type Error = crate::Error;

    fn try_from(request: DeletePollRequest) -> crate::Result<Self> {
        request
            .validate()
            .map_err(|e| crate::Error::validation("pollId", e.to_string()))?;

        request
            .poll_id
            .map(|id| Self { id: PollId::new(id) })
            .ok_or_else(|| crate::Error::validation("pollId", "missing"))
    }
}
