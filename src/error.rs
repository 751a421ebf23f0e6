//! Error types for pagewire
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagewire
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The HTTP client could not complete the request
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code as received
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// A request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Payload Errors
    // ============================================================================
    /// A 2xx response body was not valid JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A 2xx response was missing the expected list shape
    #[error("Malformed page payload: {message}")]
    MalformedPayload {
        /// What was missing or wrong
        message: String,
    },

    // ============================================================================
    // Streaming Errors
    // ============================================================================
    /// A caller-supplied record handler failed
    #[error("Record handler failed: {message}")]
    Handler {
        /// Handler-supplied reason
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid or missing configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was invalid
        message: String,
    },

    /// A built-in resource name did not resolve
    #[error("Resource '{resource}' not found in catalog")]
    ResourceNotFound {
        /// The name that was looked up
        resource: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Context-wrapped error from [`ResultExt`]
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed payload error
    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Create a handler error
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a resource-not-found error
    pub fn resource_not_found(resource: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource: resource.into(),
        }
    }

    /// Check if this error originated at the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }

    /// HTTP status code, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for pagewire
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::malformed_payload("missing 'compositions' key");
        assert_eq!(
            err.to_string(),
            "Malformed page payload: missing 'compositions' key"
        );

        let err = Error::resource_not_found("faxes");
        assert_eq!(err.to_string(), "Resource 'faxes' not found in catalog");
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::http_status(503, "").is_transport());
        assert!(!Error::malformed_payload("bad").is_transport());
        assert!(!Error::handler("boom").is_transport());
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(Error::http_status(429, "slow down").status(), Some(429));
        assert_eq!(Error::config("nope").status(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
