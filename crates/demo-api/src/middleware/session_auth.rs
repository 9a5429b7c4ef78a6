use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use demo_shared::constants::{HEADER_API_TOKEN, HEADER_CSRF_TOKEN};

use crate::error::ApiError;
use crate::state::AppState;

pub(crate) fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Require an active session. On success the session's `UserInfo` is placed
/// in the request extensions for the handler.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let headers = request.headers();
    let Some(session_key) = header_str(headers, HEADER_CSRF_TOKEN) else {
        return Err(ApiError::Unauthorized("Missing CSRF token request header.".to_string()));
    };
    let api_token = header_str(headers, HEADER_API_TOKEN).unwrap_or_default();

    let user = state.sessions.validate(session_key, api_token).await?;
    debug!("Session accepted for: {}", user.username);

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
