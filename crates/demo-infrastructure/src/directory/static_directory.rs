//! Fixed user table built from configuration

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{info, warn};

use demo_core::repositories::UserDirectory;
use demo_core::{CollaboratorError, UserRecord};
use demo_shared::config::{ApiClientEntry, UserEntry};
use demo_shared::AppError;

pub struct StaticUserDirectory {
    users: HashMap<String, UserRecord>,
}

impl StaticUserDirectory {
    pub fn new(records: Vec<UserRecord>) -> Result<Self, AppError> {
        let mut users = HashMap::with_capacity(records.len());
        for record in records {
            if record.username.is_empty() {
                return Err(AppError::InvalidConfig("user entry with empty username".into()));
            }
            if users.contains_key(&record.username) {
                return Err(AppError::InvalidConfig(format!(
                    "duplicate username: {}",
                    record.username
                )));
            }
            users.insert(record.username.clone(), record);
        }
        if users.is_empty() {
            warn!("User directory is empty; every login will fail");
        }
        Ok(Self { users })
    }

    pub fn from_users(entries: &[UserEntry]) -> Result<Self, AppError> {
        let directory = Self::new(
            entries
                .iter()
                .map(|e| UserRecord {
                    username: e.username.clone(),
                    password_credential: e.password.clone(),
                    id: e.id,
                    email: e.email.clone(),
                })
                .collect(),
        )?;
        info!("Loaded {} session users", directory.len());
        Ok(directory)
    }

    /// API clients have no id or email; they only authenticate.
    pub fn from_api_clients(entries: &[ApiClientEntry]) -> Result<Self, AppError> {
        let directory = Self::new(
            entries
                .iter()
                .map(|e| UserRecord {
                    username: e.username.clone(),
                    password_credential: e.password.clone(),
                    id: 0,
                    email: String::new(),
                })
                .collect(),
        )?;
        info!("Loaded {} API clients", directory.len());
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn lookup(&self, username: &str) -> Result<Option<UserRecord>, CollaboratorError> {
        Ok(self.users.get(username).cloned())
    }
}
