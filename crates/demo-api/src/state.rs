use std::sync::Arc;

use demo_core::repositories::{SessionCache, UserDirectory};
use demo_core::services::{CredentialVerifier, SessionConfig, SessionManager};
use demo_core::Clock;

/// Application state shared across handlers and middleware
#[derive(Clone)]
pub struct AppState {
    /// Verifies session users on login.
    pub users: Arc<CredentialVerifier<dyn UserDirectory>>,
    /// Verifies API clients presenting HTTP Basic credentials.
    pub api_clients: Arc<CredentialVerifier<dyn UserDirectory>>,
    pub sessions: Arc<SessionManager<dyn SessionCache>>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        api_clients: Arc<dyn UserDirectory>,
        cache: Arc<dyn SessionCache>,
        clock: Arc<dyn Clock>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            users: Arc::new(CredentialVerifier::new(users)),
            api_clients: Arc::new(CredentialVerifier::new(api_clients)),
            sessions: Arc::new(SessionManager::new(cache, clock, session_config)),
        }
    }
}
