//! # Demo Security
//! 
//! Security utilities: session token generation, constant-time comparison,
//! and stored credential verification.

pub mod compare;
pub mod password;
pub mod token;

pub use compare::constant_time_eq;
pub use password::{PasswordError, PasswordService};
pub use token::generate_token;
