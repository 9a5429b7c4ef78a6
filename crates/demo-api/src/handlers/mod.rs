//! HTTP handlers

pub mod health;
pub mod items;
pub mod session;

use crate::error::ApiError;

/// Fallback for unmatched routes so clients always get JSON.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
