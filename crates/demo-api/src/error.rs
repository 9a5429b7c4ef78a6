use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use demo_core::AuthError;
use demo_shared::constants::BASIC_AUTH_REALM;

use crate::response::{AuthFailure, ErrorBody, LoginFailure};

const INVALID_LOGIN_REASON: &str = "Invalid username or password";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API client credentials missing or invalid")]
    BasicAuthRequired,

    #[error("Invalid login")]
    InvalidLogin,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        errors: serde_json::Value,
    },

    #[error("Not found")]
    NotFound,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Default mapping of auth outcomes. Both credential failures collapse into
/// one response so callers cannot probe which usernames exist.
impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UnknownUser | AuthError::WrongCredential => ApiError::InvalidLogin,
            AuthError::SessionNotFound => {
                ApiError::Unauthorized("CSRF Token not valid or has expired".to_string())
            }
            AuthError::TokenMismatch => ApiError::Unauthorized("Invalid api token".to_string()),
            AuthError::CollaboratorUnavailable(msg) => ApiError::ServiceUnavailable(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BasicAuthRequired => {
                tracing::warn!("Rejected request without valid API client credentials");
                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, format!("Basic realm=\"{}\"", BASIC_AUTH_REALM))],
                    "Invalid API login credentials\n",
                )
                    .into_response()
            }
            ApiError::InvalidLogin => (
                StatusCode::UNAUTHORIZED,
                Json(LoginFailure {
                    success: false,
                    reason: INVALID_LOGIN_REASON.to_string(),
                }),
            )
                .into_response(),
            ApiError::Unauthorized(reason) => {
                let message = format!("Failed authentication: {}", reason);
                tracing::info!("{}", message);
                (StatusCode::UNAUTHORIZED, Json(AuthFailure { message })).into_response()
            }
            ApiError::Validation { message, errors } => {
                tracing::warn!("Validation error: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody::new(400, &message, errors)),
                )
                    .into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new(
                    404,
                    "Resource Not Found",
                    "The requested URL was not found on the server. \
                     If you entered the URL manually please check your spelling and try again.",
                )),
            )
                .into_response(),
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Backing service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorBody::new(
                        503,
                        "Service Unavailable",
                        "A backing service did not respond. Try again later.",
                    )),
                )
                    .into_response()
            }
        }
    }
}
