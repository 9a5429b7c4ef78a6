//! Response bodies

use serde::Serialize;

use demo_core::UserInfo;

/// Body shared by 4xx/5xx JSON errors.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    pub description: serde_json::Value,
}

impl ErrorBody {
    pub fn new(code: u16, message: &str, description: impl Into<serde_json::Value>) -> Self {
        Self {
            code,
            message: message.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub csrf_token: String,
    pub api_token: String,
    pub expires_at: String,
    pub user_info: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct LoginFailure {
    pub success: bool,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct AuthFailure {
    pub message: String,
}
