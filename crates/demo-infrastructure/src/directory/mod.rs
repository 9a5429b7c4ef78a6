//! User directory adapters

pub mod static_directory;

pub use static_directory::StaticUserDirectory;
