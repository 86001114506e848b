//! Identities and polls used across the suites

use chrono::{DateTime, TimeZone, Utc};
use pollboard_core::{Poll, PollId, UserId};

pub const ADMIN_ID: &str = "admin-1";
pub const ADMIN_SESSION: &str = "session-admin";
pub const USER_ID: &str = "user-1";
pub const USER_SESSION: &str = "session-user";

/// Midnight UTC on the given day
pub fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0).unwrap()
}

pub fn poll(id: &str, question: &str, created_at: DateTime<Utc>, options: &[&str]) -> Poll {
    Poll {
        id: PollId::new(id),
        question: question.to_string(),
        user_id: UserId::new(USER_ID),
        created_at,
        options: options.iter().map(ToString::to_string).collect(),
    }
}

/// Newer poll of the two-poll scenario
pub fn lunch_poll() -> Poll {
    poll(
        "P1",
        "Where should we get lunch?",
        day(2024, 1, 2),
        &["Tacos", "Ramen", "Salad"],
    )
}

/// Older poll of the two-poll scenario
pub fn editor_poll() -> Poll {
    poll(
        "P2",
        "Which editor do you use?",
        day(2024, 1, 1),
        &["Vim", "Emacs"],
    )
}
