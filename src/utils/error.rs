use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NylasError {
    #[error("{0}")]
    Api(NylasApiError),

    #[error("{0}")]
    OAuth(NylasOAuthError),

    #[error("API request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

impl NylasError {
    /// HTTP status of the failed response, when the error came from the API.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NylasError::Api(e) => Some(e.status_code),
            NylasError::OAuth(e) => Some(e.status_code),
            NylasError::HttpStatus { status, .. } => Some(*status),
            NylasError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, NylasError::Http(e) if e.is_timeout())
    }
}

/// Error returned by the regular `/v3` endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct NylasApiError {
    pub error_type: String,
    pub message: String,
    pub provider_error: Option<serde_json::Value>,
    pub request_id: Option<String>,
    pub status_code: u16,
}

impl fmt::Display for NylasApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nylas API error ({} {}): {}",
            self.status_code, self.error_type, self.message
        )?;
        if let Some(request_id) = &self.request_id {
            write!(f, " [request_id: {}]", request_id)?;
        }
        Ok(())
    }
}

/// Error returned by the OAuth endpoints under `/v3/connect`.
#[derive(Debug, Clone, PartialEq)]
pub struct NylasOAuthError {
    pub error: String,
    pub error_description: String,
    pub error_uri: Option<String>,
    pub error_code: Option<i64>,
    pub status_code: u16,
}

impl fmt::Display for NylasOAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nylas OAuth error ({} {}): {}",
            self.status_code, self.error, self.error_description
        )
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    request_id: Option<String>,
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
    provider_error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct OAuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: String,
    error_uri: Option<String>,
    error_code: Option<i64>,
}

impl NylasError {
    /// 將非 2xx 回應轉成對應的錯誤型別
    pub fn from_response(status: u16, path: &str, body: &str) -> Self {
        if path.starts_with("/v3/connect/") {
            if let Ok(parsed) = serde_json::from_str::<OAuthErrorBody>(body) {
                return NylasError::OAuth(NylasOAuthError {
                    error: parsed.error,
                    error_description: parsed.error_description,
                    error_uri: parsed.error_uri,
                    error_code: parsed.error_code,
                    status_code: status,
                });
            }
        }

        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
            return NylasError::Api(NylasApiError {
                error_type: parsed.error.error_type,
                message: parsed.error.message,
                provider_error: parsed.error.provider_error,
                request_id: parsed.request_id,
                status_code: status,
            });
        }

        NylasError::HttpStatus {
            status,
            body: body.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NylasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_body_is_parsed() {
        let body = r#"{
            "request_id": "req-1",
            "error": {"type": "not_found_error", "message": "Calendar not found"}
        }"#;

        match NylasError::from_response(404, "/v3/grants/abc/calendars/x", body) {
            NylasError::Api(e) => {
                assert_eq!(e.error_type, "not_found_error");
                assert_eq!(e.message, "Calendar not found");
                assert_eq!(e.request_id.as_deref(), Some("req-1"));
                assert_eq!(e.status_code, 404);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_oauth_error_body_is_parsed_for_connect_paths() {
        let body = r#"{
            "error": "invalid_grant",
            "error_description": "Code expired",
            "error_uri": "https://developer.nylas.com",
            "error_code": 400
        }"#;

        let err = NylasError::from_response(400, "/v3/connect/token", body);
        assert_eq!(err.status_code(), Some(400));
        match err {
            NylasError::OAuth(e) => {
                assert_eq!(e.error, "invalid_grant");
                assert_eq!(e.error_description, "Code expired");
                assert_eq!(e.error_code, Some(400));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_body_falls_back_to_status_error() {
        let err = NylasError::from_response(502, "/v3/grants", "Bad Gateway");
        assert!(matches!(
            err,
            NylasError::HttpStatus { status: 502, ref body } if body == "Bad Gateway"
        ));
    }
}
