//! Session domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserInfo;

/// A freshly minted session, handed back to the caller once.
///
/// `session_key` doubles as the CSRF token; `api_token` must accompany it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_key: String,
    pub api_token: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// What the backing cache holds under a session key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub api_token: String,
    pub user: UserInfo,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
