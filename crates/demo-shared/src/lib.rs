//! # Demo Shared
//! 
//! Shared configuration, constants, and telemetry for the demo API.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
