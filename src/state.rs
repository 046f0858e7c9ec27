//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{catalog::Catalog, config::Config, judge::JudgeApi, session::SessionStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Read-only algorithm registry
    pub catalog: &'static Catalog,

    /// Open editor sessions
    pub sessions: SessionStore,

    /// Judge service client
    pub judge: Arc<dyn JudgeApi>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(catalog: &'static Catalog, judge: Arc<dyn JudgeApi>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                sessions: SessionStore::new(config.sessions.max_sessions),
                judge,
                config,
            }),
        }
    }

    /// Get a reference to the algorithm catalog
    pub fn catalog(&self) -> &'static Catalog {
        self.inner.catalog
    }

    /// Get a reference to the session store
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// Get a clone of the judge client handle
    pub fn judge(&self) -> Arc<dyn JudgeApi> {
        Arc::clone(&self.inner.judge)
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
