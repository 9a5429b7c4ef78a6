//! Application-wide constants

pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 3600;
pub const DEFAULT_SESSION_KEY_PREFIX: &str = "demo_api:session:";
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
pub const TOKEN_BYTES: usize = 32;

pub const HEADER_CSRF_TOKEN: &str = "x-csrf-token";
pub const HEADER_API_TOKEN: &str = "x-api-token";
pub const BASIC_AUTH_REALM: &str = "Login Required";
