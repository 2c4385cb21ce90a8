use contracts::shared::api::ApiError;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiClientError {
    #[error("failed to build request: {0}")]
    Build(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout of {0}ms exceeded")]
    Timeout(u32),
    #[error("request failed with status code {status}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiClientError {
    /// Short machine-readable code, stable across messages.
    pub fn code(&self) -> &'static str {
        match self {
            ApiClientError::Build(_) | ApiClientError::Encode(_) => "ERR_BAD_OPTION",
            ApiClientError::Network(_) => "ERR_NETWORK",
            ApiClientError::Timeout(_) => "ECONNABORTED",
            ApiClientError::Status { status, .. } if *status < 500 => "ERR_BAD_REQUEST",
            ApiClientError::Status { .. } => "ERR_BAD_RESPONSE",
            ApiClientError::Decode(_) => "ERR_BAD_RESPONSE",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body as servers commonly send it; every field optional.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<serde_json::Value>,
}

/// Convert a client error into the [`ApiError`] shape shown to callers.
///
/// For HTTP errors the server's `message`/`details` are preferred when the
/// body carries them.
pub fn get_api_error(error: &ApiClientError) -> ApiError {
    let body = match error {
        ApiClientError::Status { body, .. } => serde_json::from_str::<ErrorBody>(body).ok(),
        _ => None,
    };
    let (message, details) = match body {
        Some(body) => (body.message, body.details),
        None => (None, None),
    };

    ApiError {
        message: message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| error.to_string()),
        code: Some(error.code().to_string()),
        details,
    }
}

/// Display text for any error.
pub fn get_error_message<E: std::fmt::Display + ?Sized>(error: &E) -> String {
    let message = error.to_string();
    if message.is_empty() {
        "An unknown error occurred".to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let error = ApiClientError::Status {
            status: 422,
            body: r#"{"message":"Invalid credentials","details":{"field":"password"}}"#.into(),
        };
        let api_error = get_api_error(&error);
        assert_eq!(api_error.message, "Invalid credentials");
        assert_eq!(api_error.code.as_deref(), Some("ERR_BAD_REQUEST"));
        assert_eq!(api_error.details.unwrap()["field"], "password");
    }

    #[test]
    fn falls_back_to_error_text() {
        let error = ApiClientError::Status {
            status: 503,
            body: "<html>Service Unavailable</html>".into(),
        };
        let api_error = get_api_error(&error);
        assert_eq!(api_error.message, "request failed with status code 503");
        assert_eq!(api_error.code.as_deref(), Some("ERR_BAD_RESPONSE"));
        assert_eq!(api_error.details, None);

        let api_error = get_api_error(&ApiClientError::Timeout(10_000));
        assert_eq!(api_error.message, "timeout of 10000ms exceeded");
        assert_eq!(api_error.code.as_deref(), Some("ECONNABORTED"));
    }

    #[test]
    fn error_message_never_empty() {
        assert_eq!(get_error_message(&ApiClientError::Network("offline".into())), "network error: offline");
        assert_eq!(get_error_message(""), "An unknown error occurred");
    }
}
