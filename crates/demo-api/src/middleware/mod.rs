//! Authentication middleware

pub mod basic_auth;
pub mod session_auth;

pub use basic_auth::require_api_client;
pub use session_auth::require_session;
