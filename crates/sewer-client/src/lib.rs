//! # sewer-client: Directory API Client for the Sewer Directory
//!
//! Network access and session state for the directory frontend: a configured
//! HTTP client plus the session objects a host drives (listings, type-ahead
//! search).
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Client Architecture                             │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │ Listing<S> (listing.rs)      │  │ DebouncedSearch<S>           │    │
//! │  │                              │  │ (search.rs)                  │    │
//! │  │ StatesListing                │  │ StatesSearch                 │    │
//! │  │ CompaniesListing             │  │ LocationAutocomplete         │    │
//! │  │ page / per_page / refresh    │  │ debounce, abort, last wins   │    │
//! │  └──────────────┬───────────────┘  └──────────────┬───────────────┘    │
//! │                 └───────────────┬─────────────────┘                     │
//! │                                 ▼                                       │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │ ApiClient (client.rs)                                           │   │
//! │  │ base URL • Slr header • retry (2 × 500 ms) • 9508 interceptor   │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 ▼                                  ▼                    │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │ HttpTransport (http.rs)      │  │ SessionEventHandler          │    │
//! │  │ ReqwestTransport             │  │ (events.rs)                  │    │
//! │  │ AbortController/AbortSignal  │  │ Expired { "/login" } → host  │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  ClientConfig (config.rs): defaults → client.toml → SEWER_* env        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - `ApiClient` and the directory endpoints
//! - [`http`] - Transport trait, reqwest transport, abort signal
//! - [`listing`] - Paginated plain-fetch sessions
//! - [`search`] - Debounced, cancellable search sessions
//! - [`events`] - Session events raised for the host
//! - [`config`] - Client configuration
//! - [`error`] - Client error types
//!
//! Sessions store failures as `last_error` instead of returning them, and a
//! cancelled request never reaches that field.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod http;
pub mod listing;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, SessionError, SessionErrorKind};
pub use events::{ChannelHandler, NoOpHandler, SessionEvent, SessionEventHandler};
pub use http::{AbortController, AbortSignal, HttpTransport, ReqwestTransport};
pub use listing::{CompaniesListing, Listing, ListingOptions, ListingState, StatesListing};
pub use search::{DebouncedSearch, LocationAutocomplete, SearchOptions, SearchPhase, SearchState, StatesSearch};
