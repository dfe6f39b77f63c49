//! # sewer-core: Contracts and Static Data for the Sewer Directory
//!
//! This crate holds everything the directory frontend and its API client agree
//! on, as pure types and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sewer Directory Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host (UI shell / CLI)                        │   │
//! │  │   State picker ──► Company list ──► Location autocomplete      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 sewer-client (sessions, HTTP)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sewer-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐ │   │
//! │  │   │   types   │  │   slug    │  │ contractors │  │validation│ │   │
//! │  │   │ envelopes │  │ normalize │  │ static list │  │  pages,  │ │   │
//! │  │   │pagination │  │  titles   │  │  lookups    │  │  queries │ │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - JSON:API-style response contracts (states, cities, companies, locations)
//! - [`slug`] - Slug normalization and slug-to-title formatting
//! - [`contractors`] - Static contractor records and lookups
//! - [`validation`] - Page, slug and search-query checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sewer_core::contractors::cities_by_state;
//! use sewer_core::slug::{format_slug_to_title, provider_slug};
//!
//! assert_eq!(provider_slug("J Sewer & Drain Plumbing"), "j-sewer-drain-plumbing");
//! assert_eq!(format_slug_to_title(Some("new-york")), "New York");
//! assert_eq!(
//!     cities_by_state("California"),
//!     vec!["Los Angeles", "San Francisco", "San Diego"]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod contractors;
mod dataset;
pub mod error;
pub mod slug;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use contractors::Contractor;
pub use dataset::{CONTRACTORS, STATES};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// API base URL used when the runtime configuration leaves it unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Name of the identifying header sent with every authenticated request.
pub const CLIENT_HEADER_NAME: &str = "Slr";

/// Value of the identifying header sent with every authenticated request.
pub const CLIENT_HEADER_VALUE: &str = "XYZWAYW1AA";

/// `error.code` value the backend returns when the session has expired.
pub const SESSION_EXPIRED_CODE: &str = "9508";

/// Location the host should navigate to when the session has expired.
pub const LOGIN_PATH: &str = "/login";

/// First page of every paginated listing.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PER_PAGE: u32 = 20;
