//! Common test utilities for the admin page integration tests
//!
//! [`MemoryStore`] stands in for every store seam and counts how it is used.
//! Store calls and cache invalidations append to one shared event log so
//! tests can assert their order.

#![allow(dead_code, clippy::unwrap_used)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Utc};
use pollboard_api::{AppState, ViewCache};
use pollboard_core::{Config, Error, Poll, PollId, Profile, Result, Role, UserId};
use pollboard_database::{PollStore, ProfileStore, SessionStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Ordered record of store mutations and cache signals
#[derive(Debug, Default, Clone)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// In-memory sessions, profiles and polls
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<String, UserId>>,
    profiles: Mutex<HashMap<UserId, Role>>,
    polls: Mutex<Vec<Poll>>,
    pub list_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub deleted_ids: Mutex<Vec<PollId>>,
    pub fail_sessions: AtomicBool,
    pub fail_profiles: AtomicBool,
    pub fail_list: AtomicBool,
    pub fail_delete: AtomicBool,
    events: EventLog,
}

impl MemoryStore {
    pub fn new(events: EventLog) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    /// Register a session cookie value for `user_id`
    pub fn add_session(&self, session_id: &str, user_id: &str) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session_id.to_string(), UserId::new(user_id));
    }

    /// Store a profile with the given raw role text
    pub fn add_profile(&self, user_id: &str, role: &str) {
        self.profiles
            .lock()
            .unwrap()
            .insert(UserId::new(user_id), Role::parse(role));
    }

    pub fn add_poll(&self, poll: Poll) {
        self.polls.lock().unwrap().push(poll);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn deleted_ids(&self) -> Vec<PollId> {
        self.deleted_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn find_active_session(
        &self,
        session_id: &str,
        _now: DateTime<Utc>,
    ) -> Result<Option<UserId>> {
        if self.fail_sessions.load(Ordering::SeqCst) {
            return Err(Error::Database("session store unavailable".to_string()));
        }
        Ok(self.sessions.lock().unwrap().get(session_id).cloned())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_profile(&self, user_id: &UserId) -> Result<Option<Profile>> {
        if self.fail_profiles.load(Ordering::SeqCst) {
            return Err(Error::Database("profile store unavailable".to_string()));
        }
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .get(user_id)
            .map(|role| Profile {
                id: user_id.clone(),
                role: role.clone(),
            }))
    }
}

#[async_trait]
impl PollStore for MemoryStore {
    async fn list_polls(&self) -> Result<Vec<Poll>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Error::Database("relation \"polls\" does not exist".to_string()));
        }

        let mut polls = self.polls.lock().unwrap().clone();
        polls.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(polls)
    }

    async fn delete_poll(&self, id: &PollId) -> Result<bool> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.deleted_ids.lock().unwrap().push(id.clone());
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Error::Database("connection reset".to_string()));
        }

        self.events.push(format!("delete:{id}"));
        let mut polls = self.polls.lock().unwrap();
        let before = polls.len();
        polls.retain(|poll| &poll.id != id);
        Ok(polls.len() < before)
    }
}

/// View cache that records every invalidation
#[derive(Debug, Default)]
pub struct RecordingCache {
    generations: Mutex<HashMap<String, u64>>,
    events: EventLog,
}

impl RecordingCache {
    pub fn new(events: EventLog) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }
}

impl ViewCache for RecordingCache {
    fn invalidate(&self, path: &str) {
        self.events.push(format!("invalidate:{path}"));
        *self
            .generations
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_insert(0) += 1;
    }

    fn generation(&self, path: &str) -> u64 {
        self.generations
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or(0)
    }
}

/// One admin session, one regular session and an empty poll table
pub struct TestApp {
    pub config: Config,
    pub store: Arc<MemoryStore>,
    pub cache: Arc<RecordingCache>,
    pub events: EventLog,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let events = EventLog::default();
        let store = Arc::new(MemoryStore::new(events.clone()));
        let cache = Arc::new(RecordingCache::new(events.clone()));

        store.add_session(ADMIN_SESSION, ADMIN_ID);
        store.add_profile(ADMIN_ID, "admin");
        store.add_session(USER_SESSION, USER_ID);
        store.add_profile(USER_ID, "user");

        Self {
            config,
            store,
            cache,
            events,
        }
    }

    /// Fresh router over the shared stores
    pub fn router(&self) -> Router {
        let state = AppState::from_stores(
            self.config.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
        )
        .with_view_cache(self.cache.clone());

        pollboard_api::router(state)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
