//! # Client Error Types
//!
//! Error types for directory API operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Control Flow        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Network        │  │  Cancelled              │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  SessionExpired         │ │
//! │  │  ConfigLoad/Save│  │  Http {status}  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐                              │
//! │  │    Protocol     │  │   Validation    │                              │
//! │  │                 │  │                 │                              │
//! │  │  Decode         │  │  (sewer-core)   │                              │
//! │  └─────────────────┘  └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sessions never hand a `ClientError` to their host. They convert it into a
//! [`SessionError`] snapshot and keep it as `last_error`, except for
//! [`ClientError::Cancelled`], which is dropped.

use sewer_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// HTTP statuses worth retrying for an idempotent GET.
pub const RETRY_STATUS_CODES: &[u16] = &[408, 409, 425, 429, 500, 502, 503, 504];

/// Client error type covering all possible request failures.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Invalid API base URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("Request timeout after {0} ms")]
    Timeout(u64),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    // =========================================================================
    // Protocol Errors
    // =========================================================================
    /// The response body did not match the expected contract.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    // =========================================================================
    // Control Flow
    // =========================================================================
    /// The caller aborted the request.
    #[error("Request was cancelled")]
    Cancelled,

    /// The backend reported an expired session.
    #[error("Session expired, redirecting to {redirect_to}")]
    SessionExpired { redirect_to: String },

    /// Request parameters failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Returns true if another attempt of the same GET may succeed.
    ///
    /// ## Retryable Errors
    /// - Network failures and timeouts
    /// - Statuses in [`RETRY_STATUS_CODES`]
    ///
    /// ## Non-Retryable Errors
    /// - Cancellation and session expiry
    /// - Decode and validation failures
    /// - Any other HTTP status
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) | ClientError::Timeout(_) => true,
            ClientError::Http { status, .. } => RETRY_STATUS_CODES.contains(status),
            _ => false,
        }
    }

    /// Returns true if the request was aborted by its caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }

    /// Returns true if the backend reported an expired session.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired { .. })
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
                | ClientError::ConfigSaveFailed(_)
        )
    }
}

// =============================================================================
// Session Error Snapshot
// =============================================================================

/// Category of a failure stored in a session's `last_error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    Network,
    Http(u16),
    Decode,
    SessionExpired,
    Validation,
    Config,
}

/// Cloneable record of the last failure a session saw, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub kind: SessionErrorKind,
    pub message: String,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl SessionError {
    /// Converts a client error. Returns `None` for cancellation, which is
    /// never recorded.
    pub fn from_client(err: &ClientError) -> Option<Self> {
        let kind = match err {
            ClientError::Cancelled => return None,
            ClientError::Network(_) | ClientError::Timeout(_) => SessionErrorKind::Network,
            ClientError::Http { status, .. } => SessionErrorKind::Http(*status),
            ClientError::Decode(_) => SessionErrorKind::Decode,
            ClientError::SessionExpired { .. } => SessionErrorKind::SessionExpired,
            ClientError::Validation(_) => SessionErrorKind::Validation,
            ClientError::InvalidConfig(_)
            | ClientError::InvalidUrl(_)
            | ClientError::ConfigLoadFailed(_)
            | ClientError::ConfigSaveFailed(_) => SessionErrorKind::Config,
        };
        Some(SessionError {
            kind,
            message: err.to_string(),
        })
    }
}
