//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and middleware via the `State`
//! extractor. The directory is read-only after startup; the session store is
//! the only mutable piece and guards its own lock.

use std::sync::Arc;

use access::GuardConfig;

use crate::config::ServerConfig;
use crate::services::session::SessionStore;
use crate::services::users::UserDirectory;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub guard: Arc<GuardConfig>,
    pub directory: Arc<UserDirectory>,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, directory: UserDirectory) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self {
            config: Arc::new(config),
            guard: Arc::new(GuardConfig::default()),
            directory: Arc::new(directory),
            sessions,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
