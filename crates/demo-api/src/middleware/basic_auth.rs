use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, warn};

use demo_core::AuthError;

use crate::error::ApiError;
use crate::state::AppState;

/// Username and password carried by an `Authorization: Basic` header.
#[derive(Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

pub fn parse_basic_auth(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Require a known API client on every request to the wrapped routes.
pub async fn require_api_client(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(credentials) = parse_basic_auth(request.headers()) else {
        debug!("Request without usable Basic credentials");
        return Err(ApiError::BasicAuthRequired);
    };

    match state
        .api_clients
        .verify(&credentials.username, &credentials.password)
        .await
    {
        Ok(client) => {
            debug!("API client authenticated: {}", client.username);
            Ok(next.run(request).await)
        }
        Err(AuthError::UnknownUser) | Err(AuthError::WrongCredential) => {
            warn!("API client rejected: {}", credentials.username);
            Err(ApiError::BasicAuthRequired)
        }
        Err(e) => Err(e.into()),
    }
}
