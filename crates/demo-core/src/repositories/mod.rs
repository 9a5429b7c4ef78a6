//! Collaborator traits (ports)

pub mod session_cache;
pub mod user_directory;

pub use session_cache::SessionCache;
pub use user_directory::UserDirectory;

#[cfg(test)]
pub use session_cache::MockSessionCache;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
