//! Application state management

use crate::cache::{RevalidationRegistry, ViewCache};
use pollboard_core::Config;
use pollboard_database::{Database, PollStore, ProfileStore, SessionStore};
use std::fmt;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Session resolution
    pub sessions: Arc<dyn SessionStore>,
    /// Profile lookup
    pub profiles: Arc<dyn ProfileStore>,
    /// Poll listing and deletion
    pub polls: Arc<dyn PollStore>,
    /// Rendered page invalidation
    pub view_cache: Arc<dyn ViewCache>,
    /// Database handle for health checks, absent when running on other stores
    pub database: Option<Database>,
}

impl AppState {
    /// Create application state backed by Postgres
    #[must_use]
    pub fn new(config: Config, database: Database) -> Self {
        let store = Arc::new(database.store());

        Self {
            config,
            sessions: store.clone(),
            profiles: store.clone(),
            polls: store,
            view_cache: Arc::new(RevalidationRegistry::new()),
            database: Some(database),
        }
    }

    /// Create application state from arbitrary store implementations
    #[must_use]
    pub fn from_stores(
        config: Config,
        sessions: Arc<dyn SessionStore>,
        profiles: Arc<dyn ProfileStore>,
        polls: Arc<dyn PollStore>,
    ) -> Self {
        Self {
            config,
            sessions,
            profiles,
            polls,
            view_cache: Arc::new(RevalidationRegistry::new()),
            database: None,
        }
    }

    /// Replace the view cache
    #[must_use]
    pub fn with_view_cache(mut self, view_cache: Arc<dyn ViewCache>) -> Self {
        self.view_cache = view_cache;
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}
