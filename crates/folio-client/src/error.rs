//! Error types for folio-client

use std::time::Duration;
use thiserror::Error;

/// Result type alias for folio-client operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Any failed HTTP exchange.
///
/// This is the single error kind produced by the API client and the
/// resource clients. 4xx and 5xx are not distinguished beyond keeping the
/// status code and whatever message the server supplied.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportError {
    /// The request did not complete within the transport timeout
    #[error("{method} {path} timed out after {timeout:?}")]
    Timeout {
        /// HTTP method
        method: String,
        /// API path that was requested
        path: String,
        /// Timeout that elapsed
        timeout: Duration,
    },

    /// Connection, TLS or other transport-level failure
    #[error("{method} {path} failed: {message}")]
    Network {
        /// HTTP method
        method: String,
        /// API path that was requested
        path: String,
        /// Transport description
        message: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("{method} {path} returned HTTP {status}: {message}")]
    Status {
        /// HTTP method
        method: String,
        /// API path that was requested
        path: String,
        /// Status code
        status: u16,
        /// Server-supplied message, or the status reason when absent
        message: String,
    },

    /// A 2xx response whose body did not match the expected shape
    #[error("{method} {path} returned an unexpected body: {message}")]
    Decode {
        /// HTTP method
        method: String,
        /// API path that was requested
        path: String,
        /// Parser description
        message: String,
    },
}

impl TransportError {
    /// Text suitable for a user-facing notification.
    ///
    /// The server's own message when it sent one, otherwise the
    /// transport-level description.
    pub fn message(&self) -> String {
        match self {
            TransportError::Timeout { timeout, .. } => {
                format!("request timed out after {timeout:?}")
            }
            TransportError::Network { message, .. }
            | TransportError::Status { message, .. }
            | TransportError::Decode { message, .. } => message.clone(),
        }
    }

    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// API path of the failed request.
    pub fn path(&self) -> &str {
        match self {
            TransportError::Timeout { path, .. }
            | TransportError::Network { path, .. }
            | TransportError::Status { path, .. }
            | TransportError::Decode { path, .. } => path,
        }
    }

    /// Returns `true` for a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Looks for a `detail` or `message` field in a JSON object. A structured
/// `detail` (e.g. a validation error list) is returned as compact JSON.
/// Non-JSON bodies are returned trimmed. Blank bodies yield `None`.
pub fn extract_server_message(body: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        if let Some(obj) = value.as_object() {
            for key in ["detail", "message", "error"] {
                match obj.get(key) {
                    Some(serde_json::Value::String(s)) if !s.trim().is_empty() => {
                        return Some(s.trim().to_string());
                    }
                    Some(serde_json::Value::Null | serde_json::Value::String(_)) | None => {}
                    Some(other) => return Some(other.to_string()),
                }
            }
        }
        return match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string()),
        };
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
