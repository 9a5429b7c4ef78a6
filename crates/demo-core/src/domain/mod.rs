//! Domain entities

pub mod session;
pub mod user;

pub use session::{Session, StoredSession};
pub use user::{UserInfo, UserRecord};
