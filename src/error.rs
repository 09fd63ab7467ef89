//! Error types for talking to the BookCompass API.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when calling the remote API or browser storage.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (network down, CORS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Missing or expired token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Logged in but not allowed (non-admin on admin endpoints).
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Local storage unavailable or rejected the write.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Error body returned by the API: `{ "message": ... }` or `{ "error": ... }`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

impl ApiError {
    /// Map a failed status and raw body text to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| default_message(status).to_string());

        match status {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Api { status, message },
        }
    }

    /// The text shown to the user in an error banner or toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http(_) => "Could not reach the server. Check your connection and try again.".to_string(),
            ApiError::Api { message, .. }
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message) => message.clone(),
            ApiError::Parse(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Storage(_) => "Your browser blocked local storage.".to_string(),
        }
    }

    /// True when the stored session should be discarded.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

fn default_message(status: u16) -> &'static str {
    match status {
        400 => "The request was invalid.",
        401 => "Please log in to continue.",
        403 => "You do not have permission to do that.",
        404 => "Not found.",
        409 => "That already exists.",
        500..=599 => "The server had a problem. Please try again later.",
        _ => "Something went wrong.",
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_uses_message_field() {
        let err = ApiError::from_status(400, r#"{"message":"Email already in use"}"#);
        assert_eq!(err.to_string(), "API error (400): Email already in use");
        assert_eq!(err.user_message(), "Email already in use");
    }

    #[test]
    fn test_from_status_accepts_error_field() {
        let err = ApiError::from_status(404, r#"{"error":"Book not found"}"#);
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Book not found"));
    }

    #[test]
    fn test_unauthorized_mapping() {
        let err = ApiError::from_status(401, "");
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Please log in to continue.");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), "The server had a problem. Please try again later.");
        let err = ApiError::from_status(403, r#"{"message":"  "}"#);
        assert!(matches!(err, ApiError::Forbidden(ref m) if m == "You do not have permission to do that."));
    }
}
