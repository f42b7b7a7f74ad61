/// Error handling for the API client
///
/// This module provides a unified error type for everything a request can
/// go wrong with. All client methods return `Result<T, ApiError>`.
///
/// The backend is a DRF-style API: validation failures arrive as a 400
/// with a `{"field": ["message", ...]}` body, and the console surfaces the
/// first field error verbatim. Plain `{"error": "..."}` and
/// `{"detail": "..."}` bodies are passed through as-is.
///
/// # Example
///
/// ```no_run
/// use edudash_client::{ApiClient, ApiError};
///
/// # async fn example(client: ApiClient) {
/// match client.list_users().await {
///     Ok(users) => println!("{} accounts", users.len()),
///     Err(ApiError::Unauthorized) => eprintln!("Session expired; log in again"),
///     Err(err) => eprintln!("{}", err),
/// }
/// # }
/// ```
use reqwest::StatusCode;
use thiserror::Error;

/// Client result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified client error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session token is missing, expired, or rejected (401)
    #[error("Authentication required")]
    Unauthorized,

    /// The account lacks permission for the operation (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The resource does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A field failed backend validation (400 with a DRF error body)
    #[error("{field}: {message}")]
    Validation {
        /// Field that failed validation
        field: String,

        /// First error message the backend reported for it
        message: String,
    },

    /// Any other non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,

        /// Message extracted from the response body
        message: String,
    },

    /// Transport-level failure (connect, timeout, TLS)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Maps a non-success response to an error
    ///
    /// `body` is the raw response text; JSON bodies are probed for the
    /// conventional DRF shapes, anything else falls through to a generic
    /// status error.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden(extract_message(body)),
            StatusCode::NOT_FOUND => ApiError::NotFound(extract_message(body)),
            StatusCode::BAD_REQUEST => match first_field_error(body) {
                Some((field, message)) => ApiError::Validation { field, message },
                None => ApiError::Api {
                    status: status.as_u16(),
                    message: extract_message(body),
                },
            },
            _ => ApiError::Api {
                status: status.as_u16(),
                message: extract_message(body),
            },
        }
    }

    /// Whether the caller should treat this as a sign-in problem
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Pulls a display message out of a response body
///
/// Prefers `error`, then `detail`, then `message`; falls back to the raw
/// body, or the empty-body placeholder.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "detail", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        "no response body".to_string()
    } else {
        body.trim().to_string()
    }
}

/// Extracts the first DRF field error from a 400 body, if the body has
/// that shape
fn first_field_error(body: &str) -> Option<(String, String)> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for (field, messages) in object {
        // `error`/`detail` bodies are not field maps
        if field == "error" || field == "detail" || field == "message" {
            continue;
        }
        if let Some(first) = messages
            .as_array()
            .and_then(|list| list.first())
            .and_then(|m| m.as_str())
        {
            return Some((field.clone(), first.to_string()));
        }
    }
    None
}
