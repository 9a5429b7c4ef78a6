//! Domain errors

use thiserror::Error;

/// Outcome of a failed credential or session check.
///
/// The first four variants are expected results a caller branches on.
/// `CollaboratorUnavailable` means the user directory or the backing cache
/// could not answer; it is never reported as "not found".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unknown user")]
    UnknownUser,

    #[error("Wrong credential")]
    WrongCredential,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Token mismatch")]
    TokenMismatch,

    #[error("Collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),
}

/// Failure reported by a user directory or cache adapter.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<CollaboratorError> for AuthError {
    fn from(e: CollaboratorError) -> Self {
        AuthError::CollaboratorUnavailable(e.to_string())
    }
}
