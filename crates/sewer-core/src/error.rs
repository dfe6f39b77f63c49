//! # Error Types
//!
//! Domain-specific error types for sewer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sewer-core errors (this file)                                         │
//! │  ├── CoreError        - Lookup failures in the static dataset          │
//! │  └── ValidationError  - Page, per-page and empty-slug failures         │
//! │                                                                         │
//! │  sewer-client errors (separate crate)                                  │
//! │  └── ClientError      - Config, transport, protocol, cancellation      │
//! │                                                                         │
//! │  Flow: ValidationError → ClientError → SessionError → Host             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by lookups over the static dataset.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No contractor carries the requested id.
    #[error("Contractor not found: {0}")]
    ContractorNotFound(String),

    /// The state has no contractors in the static dataset.
    #[error("No contractors listed for state: {0}")]
    UnknownState(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before a request is built so that malformed parameters never reach
/// the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is below its lower bound.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
