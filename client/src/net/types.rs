//! Wire types for the auth backend.
//!
//! DESIGN
//! ======
//! Response classification is a pure function of `(status, body)` so the
//! error taxonomy can be exercised without a browser or a live backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

const RATE_LIMITED_STATUS: u16 = 429;

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`. Optional profile keys are omitted when
/// the user left them blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub organization: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_size: Option<String>,
}

/// One outbound auth call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthRequest {
    /// Path of the backend endpoint this request targets.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login(_) => LOGIN_PATH,
            Self::Register(_) => REGISTER_PATH,
        }
    }

    /// Email the resulting session will belong to.
    pub fn email(&self) -> &str {
        match self {
            Self::Login(req) => &req.email,
            Self::Register(req) => &req.email,
        }
    }

    /// JSON body for the request.
    pub fn body(&self) -> serde_json::Value {
        let value = match self {
            Self::Login(req) => serde_json::to_value(req),
            Self::Register(req) => serde_json::to_value(req),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}

/// Success body of either auth endpoint.
///
/// `access_token` is optional on the wire: a 2xx without it is a malformed
/// response and is rejected by [`AuthResponse::into_token`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl AuthResponse {
    /// Extract a usable token, treating an empty string as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] when no token was delivered.
    pub fn into_token(self) -> Result<String, AuthError> {
        match self.access_token {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(AuthError::MissingToken),
        }
    }
}

/// Error body shape: `{"detail": "..."}` or `{"detail": [{"msg": "..."}]}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Deserialize)]
struct FieldError {
    msg: Option<String>,
    message: Option<String>,
}

impl FieldError {
    fn text(&self) -> Option<&str> {
        self.msg.as_deref().or(self.message.as_deref()).filter(|m| !m.is_empty())
    }
}

/// Every way an auth call can fail, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Too many attempts. Please wait a minute and try again.")]
    RateLimited,
    #[error("{0}")]
    Detail(String),
    #[error("Authentication failed. Please try again.")]
    Failed,
    #[error("Authentication succeeded but no token received")]
    MissingToken,
}

/// Classify a non-2xx response.
///
/// 429 wins over any body content; otherwise the `detail` field is used when
/// it carries a message, and everything else falls back to [`AuthError::Failed`].
pub fn classify_failure(status: u16, body: &str) -> AuthError {
    if status == RATE_LIMITED_STATUS {
        return AuthError::RateLimited;
    }
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return AuthError::Failed;
    };
    match parsed.detail {
        Some(ErrorDetail::Message(msg)) if !msg.trim().is_empty() => AuthError::Detail(msg),
        Some(ErrorDetail::Fields(fields)) => {
            let joined = fields.iter().filter_map(FieldError::text).collect::<Vec<_>>().join(", ");
            if joined.is_empty() { AuthError::Failed } else { AuthError::Detail(joined) }
        }
        _ => AuthError::Failed,
    }
}

/// Turn a raw `(status, body)` pair into a token or a classified error.
///
/// # Errors
///
/// Returns the classified [`AuthError`] for non-2xx statuses and
/// [`AuthError::MissingToken`] for a 2xx body without a token.
pub fn interpret_response(status: u16, body: &str) -> Result<String, AuthError> {
    if !(200..300).contains(&status) {
        return Err(classify_failure(status, body));
    }
    serde_json::from_str::<AuthResponse>(body)
        .unwrap_or_default()
        .into_token()
}
