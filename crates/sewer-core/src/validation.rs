//! # Validation Module
//!
//! Checks applied before a request is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Session (sewer-client)                                       │
//! │  └── Query classification: empty / too short / searchable             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── page >= 1, per_page >= 1                                          │
//! │  └── slugs are non-empty (encoded as path segments by the client)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  └── Authoritative checks, JSON:API errors                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Pagination
// =============================================================================

/// Validates a 1-based page number.
pub fn validate_page(page: u32) -> ValidationResult<()> {
    if page == 0 {
        return Err(ValidationError::BelowMinimum {
            field: "page".to_string(),
            min: 1,
        });
    }
    Ok(())
}

/// Validates a page size. The upper bound belongs to the backend.
pub fn validate_per_page(per_page: u32) -> ValidationResult<()> {
    if per_page == 0 {
        return Err(ValidationError::BelowMinimum {
            field: "per_page".to_string(),
            min: 1,
        });
    }
    Ok(())
}

// =============================================================================
// Slugs
// =============================================================================

/// Validates a slug used as a path segment or filter value.
///
/// Only emptiness is rejected; whatever characters the slug holds are
/// percent-encoded when the request URL is built.
///
/// ## Example
/// ```rust
/// use sewer_core::validation::validate_slug;
///
/// assert!(validate_slug("state_slug", "new-york").is_ok());
/// assert!(validate_slug("state_slug", "New York").is_ok());
/// assert!(validate_slug("state_slug", "  ").is_err());
/// ```
pub fn validate_slug(field: &str, slug: &str) -> ValidationResult<()> {
    if slug.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Search Queries
// =============================================================================

/// How a typed search query should be handled once its debounce window ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryClass {
    /// Nothing but whitespace; results are cleared.
    Empty,
    /// Shorter than the minimum; empty results, no request.
    TooShort,
    /// Long enough to send; carries the trimmed query.
    Searchable(String),
}

/// Classifies a query against `min_chars`, counting characters of the
/// trimmed text.
pub fn classify_query(query: &str, min_chars: usize) -> QueryClass {
    let trimmed = query.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        QueryClass::Empty
    } else if len < min_chars {
        QueryClass::TooShort
    } else {
        QueryClass::Searchable(trimmed.to_string())
    }
}
