//! Credential verification against a user directory

use std::sync::Arc;
use tracing::{debug, error, warn};

use demo_security::PasswordService;

use crate::domain::UserInfo;
use crate::error::AuthError;
use crate::repositories::UserDirectory;

/// Checks a username/password pair. Pure lookup and compare, no side effects.
pub struct CredentialVerifier<D: UserDirectory + ?Sized> {
    directory: Arc<D>,
}

impl<D: UserDirectory + ?Sized> CredentialVerifier<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub async fn verify(&self, username: &str, password: &str) -> Result<UserInfo, AuthError> {
        let record = self.directory.lookup(username).await?.ok_or_else(|| {
            warn!("Credential check failed: unknown user: {}", username);
            AuthError::UnknownUser
        })?;

        let valid = PasswordService::verify(password, &record.password_credential).map_err(|e| {
            error!("Stored credential for {} is unreadable: {}", username, e);
            AuthError::CollaboratorUnavailable(format!("unreadable credential for {}", username))
        })?;

        if !valid {
            warn!("Credential check failed: wrong credential for: {}", username);
            return Err(AuthError::WrongCredential);
        }

        debug!("Credential check passed for: {}", username);
        Ok(UserInfo::from(&record))
    }
}
