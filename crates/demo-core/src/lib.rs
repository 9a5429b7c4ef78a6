//! # Demo Core
//! 
//! Domain entities, collaborator ports, and the credential/session services.

pub mod clock;
pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::*;
pub use error::{AuthError, CollaboratorError};
