//! # Demo Infrastructure
//! 
//! Cache and user directory implementations (adapters).

pub mod cache;
pub mod directory;

pub use cache::{MemoryCache, RedisCache};
pub use directory::StaticUserDirectory;
