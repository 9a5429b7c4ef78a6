//! User directory trait (port)

use async_trait::async_trait;

use crate::domain::UserRecord;
use crate::error::CollaboratorError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn lookup(&self, username: &str) -> Result<Option<UserRecord>, CollaboratorError>;
}
