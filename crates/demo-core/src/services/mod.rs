//! Domain services (business logic)

pub mod credential_verifier;
pub mod session_manager;

pub use credential_verifier::CredentialVerifier;
pub use session_manager::{SessionConfig, SessionManager};
