//! Session handlers (login, logout)

use axum::{
    extract::{rejection::FormRejection, State},
    http::HeaderMap,
    Form, Json,
};
use serde_json::json;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use demo_core::AuthError;
use demo_shared::constants::{HEADER_API_TOKEN, HEADER_CSRF_TOKEN};

use crate::error::ApiError;
use crate::middleware::session_auth::header_str;
use crate::response::{LoginResponse, LogoutResponse};
use crate::state::AppState;

const MISSING_FIELD: &str = "Missing data for required field.";

/// Login form after key normalization.
#[derive(Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Field names are matched case-insensitively; both fields must be non-empty.
    pub fn parse(raw: HashMap<String, String>) -> Result<Self, ApiError> {
        let mut fields: HashMap<String, String> = raw
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        let username = fields.remove("username").filter(|v| !v.is_empty());
        let password = fields.remove("password").filter(|v| !v.is_empty());

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            (username, password) => {
                let mut errors = serde_json::Map::new();
                if username.is_none() {
                    errors.insert("username".into(), json!([MISSING_FIELD]));
                }
                if password.is_none() {
                    errors.insert("password".into(), json!([MISSING_FIELD]));
                }
                Err(ApiError::Validation {
                    message: "Invalid login form".to_string(),
                    errors: errors.into(),
                })
            }
        }
    }
}

/// Login handler - POST /api/session
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    // An unreadable body carries no fields at all.
    let raw = match form {
        Ok(Form(raw)) => raw,
        Err(rejection) => {
            debug!("Login form not readable: {}", rejection);
            HashMap::new()
        }
    };
    let form = LoginForm::parse(raw)?;

    let user = match state.users.verify(&form.username, &form.password).await {
        Ok(user) => user,
        Err(e @ (AuthError::UnknownUser | AuthError::WrongCredential)) => {
            warn!("Login failed for {}: {}", form.username, e);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let session = state.sessions.create_session(&user).await?;
    info!("Login successful for: {}", user.username);

    Ok(Json(LoginResponse {
        success: true,
        csrf_token: session.session_key,
        api_token: session.api_token,
        expires_at: session.expires_at.to_rfc3339(),
        user_info: user,
    }))
}

/// Logout handler - DELETE /api/session
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, ApiError> {
    match header_str(&headers, HEADER_CSRF_TOKEN) {
        Some(session_key) => {
            state.sessions.destroy_session(session_key).await?;
            warn!(
                "Session deleted (api token presented: {})",
                header_str(&headers, HEADER_API_TOKEN).is_some()
            );
        }
        None => warn!("Logout without CSRF token: session not active"),
    }
    Ok(Json(LogoutResponse { success: true }))
}
