//! User domain entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user as held by the user directory.
///
/// `password_credential` is opaque to everything but the credential verifier.
#[derive(Clone)]
pub struct UserRecord {
    pub username: String,
    pub password_credential: String,
    pub id: i64,
    pub email: String,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password_credential", &"<redacted>")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish()
    }
}

/// Identity returned on successful verification and session validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub id: i64,
    pub email: String,
}

impl From<&UserRecord> for UserInfo {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            id: record.id,
            email: record.email.clone(),
        }
    }
}
