use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the OpenAI API
#[derive(Debug, Error)]
pub enum OpenAIApiError {
    #[error("Invalid request (400): {message}")]
    InvalidRequest { message: String },

    #[error("Authentication error (401): {message}")]
    Authentication { message: String },

    #[error("Permission error (403): {message}")]
    Permission { message: String },

    #[error("Not found (404): {message}")]
    NotFound { message: String },

    #[error("Rate limit exceeded (429): {message}")]
    RateLimit { message: String },

    #[error("Internal API error (500): {message}")]
    Api { message: String },

    #[error("API overloaded (503): {message}")]
    Overloaded { message: String },

    /// Catch-all for unexpected status codes
    #[error("Unexpected API error ({status}): {message}")]
    Unexpected { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    message: String,
}

impl OpenAIApiError {
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status.as_u16() {
            400 => Self::InvalidRequest { message },
            401 => Self::Authentication { message },
            403 => Self::Permission { message },
            404 => Self::NotFound { message },
            429 => Self::RateLimit { message },
            500 => Self::Api { message },
            503 => Self::Overloaded { message },
            other => Self::Unexpected {
                status: other,
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_json_error_body() {
        let body = r#"{"error": {"message": "Rate limit reached", "type": "rate_limit_error"}}"#;
        let err = OpenAIApiError::from_status(StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(err.to_string(), "Rate limit exceeded (429): Rate limit reached");
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = OpenAIApiError::from_status(StatusCode::BAD_GATEWAY, "upstream timeout");
        assert_eq!(
            err.to_string(),
            "Unexpected API error (502): upstream timeout"
        );
    }
}
