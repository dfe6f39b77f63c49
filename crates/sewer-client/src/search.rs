//! # Debounced Search
//!
//! Type-ahead sessions: states search and location autocomplete.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────┐  search(q)   ┌────────────┐  window elapses  ┌──────────┐   │
//! │   │ Idle │─────────────►│ Debouncing │─────────────────►│ InFlight │   │
//! │   └──────┘              └────────────┘                  └────┬─────┘   │
//! │      ▲                    │  ▲    │                           │         │
//! │      │  search("")        │  └────┘ search(q') restarts       │         │
//! │      │  clear_results()   │         the window                ▼         │
//! │      └────────────────────┘               ┌────────────┬────────────┐  │
//! │      ▲                                    │ Succeeded  │  Failed    │  │
//! │      └────────────────────────────────────┴────────────┴────────────┘  │
//! │                                                                         │
//! │  Only the newest request may write results: each request carries the   │
//! │  generation that issued it, and a response whose generation is no      │
//! │  longer in flight is dropped. Starting a request aborts its            │
//! │  predecessor, and an aborted request never touches the state.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `search` is synchronous and must be called from inside a Tokio runtime;
//! the debounce timer runs as a spawned task.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use sewer_core::validation::{classify_query, QueryClass};
use sewer_core::{
    AutocompleteMeta, ListResponse, LocationAttributes, PaginationMeta, ResourceEnvelope,
    StateAttributes,
};

use crate::client::ApiClient;
use crate::config::SearchSettings;
use crate::error::{ClientResult, SessionError};
use crate::http::{AbortController, AbortSignal};

// =============================================================================
// Options & State
// =============================================================================

/// Timing and threshold of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Quiet period after the last keystroke before a request is sent.
    pub debounce: Duration,
    /// Minimum trimmed length for a request to be sent.
    pub min_chars: usize,
}

/// Where a search session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Debouncing,
    InFlight,
    Succeeded,
    Failed,
    /// Disposed while a timer or request was outstanding.
    Cancelled,
}

/// Snapshot of a search session.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<A> {
    pub query: String,
    pub results: Vec<ResourceEnvelope<A>>,
    pub pagination: Option<PaginationMeta>,
    pub meta: Option<AutocompleteMeta>,
    pub is_loading: bool,
    pub last_error: Option<SessionError>,
    pub phase: SearchPhase,
}

impl<A> Default for SearchState<A> {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            pagination: None,
            meta: None,
            is_loading: false,
            last_error: None,
            phase: SearchPhase::Idle,
        }
    }
}

impl<A> SearchState<A> {
    fn clear_results(&mut self) {
        self.results.clear();
        self.pagination = None;
        self.meta = None;
        self.is_loading = false;
        self.last_error = None;
    }
}

// =============================================================================
// Sources
// =============================================================================

/// The endpoint a search session queries.
#[async_trait]
pub trait SearchSource: Send + Sync + 'static {
    type Attributes: Clone + Send + Sync + 'static;

    /// Short label for log lines.
    const NAME: &'static str;

    /// Sends the already-trimmed query.
    async fn search(
        &self,
        client: &ApiClient,
        query: &str,
        signal: &AbortSignal,
    ) -> ClientResult<ListResponse<Self::Attributes>>;

    /// Autocomplete echo for a successful response.
    fn meta(&self, _response: &ListResponse<Self::Attributes>) -> Option<AutocompleteMeta> {
        None
    }
}

/// States matching a name fragment, optionally within one country.
#[derive(Debug, Clone, Default)]
pub struct StatesSource {
    pub country: Option<String>,
}

#[async_trait]
impl SearchSource for StatesSource {
    type Attributes = StateAttributes;
    const NAME: &'static str = "states";

    async fn search(
        &self,
        client: &ApiClient,
        query: &str,
        signal: &AbortSignal,
    ) -> ClientResult<ListResponse<StateAttributes>> {
        client
            .search_states(query, self.country.as_deref(), signal)
            .await
    }
}

/// Location suggestions.
#[derive(Debug, Clone)]
pub struct LocationSource {
    pub limit: u32,
}

#[async_trait]
impl SearchSource for LocationSource {
    type Attributes = LocationAttributes;
    const NAME: &'static str = "locations";

    async fn search(
        &self,
        client: &ApiClient,
        query: &str,
        signal: &AbortSignal,
    ) -> ClientResult<ListResponse<LocationAttributes>> {
        client.autocomplete_locations(query, self.limit, signal).await
    }

    fn meta(&self, response: &ListResponse<LocationAttributes>) -> Option<AutocompleteMeta> {
        response
            .meta
            .as_ref()
            .and_then(|m| m.autocomplete(response.data.len(), self.limit))
    }
}

// =============================================================================
// Shared Session Internals
// =============================================================================

struct InFlight {
    generation: u64,
    controller: AbortController,
}

struct Inner<A> {
    state: SearchState<A>,
    /// Bumped by every `search`, `clear_results` and `dispose`.
    generation: u64,
    pending: Option<JoinHandle<()>>,
    in_flight: Option<InFlight>,
    disposed: bool,
}

impl<A> Inner<A> {
    /// Drops the pending timer and aborts the in-flight request.
    /// Returns true if either existed.
    fn cancel_outstanding(&mut self) -> bool {
        let mut cancelled = false;
        if let Some(timer) = self.pending.take() {
            timer.abort();
            cancelled = true;
        }
        if let Some(request) = self.in_flight.take() {
            request.controller.abort();
            cancelled = true;
        }
        cancelled
    }
}

struct Shared<S: SearchSource> {
    client: ApiClient,
    source: S,
    options: SearchOptions,
    inner: Mutex<Inner<S::Attributes>>,
}

impl<S: SearchSource> Shared<S> {
    fn lock(&self) -> MutexGuard<'_, Inner<S::Attributes>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs when the debounce window of `generation` elapses.
    async fn fire(self: Arc<Self>, generation: u64, query: String) {
        let (signal, query) = {
            let mut inner = self.lock();
            if inner.generation != generation || inner.disposed {
                return;
            }
            inner.pending = None;

            if let Some(previous) = inner.in_flight.take() {
                debug!(search = S::NAME, "Aborting superseded request");
                previous.controller.abort();
            }

            match classify_query(&query, self.options.min_chars) {
                QueryClass::Empty | QueryClass::TooShort => {
                    inner.state.clear_results();
                    inner.state.phase = SearchPhase::Idle;
                    return;
                }
                QueryClass::Searchable(trimmed) => {
                    let controller = AbortController::new();
                    let signal = controller.signal();
                    inner.in_flight = Some(InFlight {
                        generation,
                        controller,
                    });
                    inner.state.is_loading = true;
                    inner.state.last_error = None;
                    inner.state.phase = SearchPhase::InFlight;
                    (signal, trimmed)
                }
            }
        };

        debug!(search = S::NAME, query = %query, "Sending search");
        let result = self.source.search(&self.client, &query, &signal).await;

        if matches!(&result, Err(err) if err.is_cancelled()) {
            debug!(search = S::NAME, query = %query, "Search cancelled");
            return;
        }

        let mut inner = self.lock();
        if inner.in_flight.as_ref().map(|f| f.generation) != Some(generation) {
            debug!(search = S::NAME, query = %query, "Dropping stale search response");
            return;
        }
        inner.in_flight = None;

        // A newer query still waiting out its window keeps the session debouncing.
        let debouncing = inner.pending.is_some();
        let state = &mut inner.state;
        state.is_loading = false;
        match result {
            Ok(response) => {
                state.meta = self.source.meta(&response);
                state.pagination = response.pagination();
                state.results = response.data;
                state.phase = if debouncing {
                    SearchPhase::Debouncing
                } else {
                    SearchPhase::Succeeded
                };
                debug!(search = S::NAME, count = state.results.len(), "Search results updated");
            }
            Err(err) => {
                error!(search = S::NAME, query = %query, error = %err, "Search failed");
                state.results.clear();
                state.pagination = None;
                state.meta = None;
                state.last_error = SessionError::from_client(&err);
                state.phase = if debouncing {
                    SearchPhase::Debouncing
                } else {
                    SearchPhase::Failed
                };
            }
        }
    }
}

// =============================================================================
// Debounced Search Session
// =============================================================================

/// A debounced, cancellable search session over one [`SearchSource`].
///
/// Dropping the session cancels its timer and in-flight request.
pub struct DebouncedSearch<S: SearchSource> {
    shared: Arc<Shared<S>>,
}

/// States search (400 ms debounce, 1 char minimum by default).
pub type StatesSearch = DebouncedSearch<StatesSource>;

/// Location autocomplete (300 ms debounce, 2 char minimum by default).
pub type LocationAutocomplete = DebouncedSearch<LocationSource>;

impl StatesSearch {
    pub fn states(client: ApiClient, settings: &SearchSettings, country: Option<String>) -> Self {
        let options = SearchOptions {
            debounce: Duration::from_millis(settings.states_debounce_ms),
            min_chars: settings.states_min_chars,
        };
        Self::new(client, StatesSource { country }, options)
    }
}

impl LocationAutocomplete {
    pub fn locations(client: ApiClient, settings: &SearchSettings) -> Self {
        let options = SearchOptions {
            debounce: Duration::from_millis(settings.location_debounce_ms),
            min_chars: settings.location_min_chars,
        };
        let source = LocationSource {
            limit: settings.location_limit,
        };
        Self::new(client, source, options)
    }
}

impl<S: SearchSource> DebouncedSearch<S> {
    pub fn new(client: ApiClient, source: S, options: SearchOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                client,
                source,
                options,
                inner: Mutex::new(Inner {
                    state: SearchState::default(),
                    generation: 0,
                    pending: None,
                    in_flight: None,
                    disposed: false,
                }),
            }),
        }
    }

    pub fn options(&self) -> SearchOptions {
        self.shared.options
    }

    /// Records `query` and restarts the debounce window.
    ///
    /// A blank query clears the results immediately and cancels everything
    /// outstanding. Repeating the same query is not deduplicated.
    pub fn search(&self, query: &str) {
        let mut inner = self.shared.lock();
        if inner.disposed {
            warn!(search = S::NAME, "Search on disposed session ignored");
            return;
        }

        inner.generation += 1;
        let generation = inner.generation;
        inner.state.query = query.to_string();

        if query.trim().is_empty() {
            inner.cancel_outstanding();
            inner.state.clear_results();
            inner.state.phase = SearchPhase::Idle;
            return;
        }

        if let Some(timer) = inner.pending.take() {
            timer.abort();
        }
        inner.state.phase = SearchPhase::Debouncing;

        let shared = Arc::clone(&self.shared);
        let query = query.to_string();
        inner.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(shared.options.debounce).await;
            shared.fire(generation, query).await;
        }));
    }

    /// Resets the session to its initial state. Idempotent.
    pub fn clear_results(&self) {
        let mut inner = self.shared.lock();
        inner.generation += 1;
        inner.cancel_outstanding();
        inner.state = SearchState::default();
    }

    /// Cancels the pending timer and in-flight request; later searches are
    /// ignored.
    pub fn dispose(&self) {
        let mut inner = self.shared.lock();
        if inner.disposed {
            return;
        }
        inner.disposed = true;
        inner.generation += 1;
        if inner.cancel_outstanding() {
            debug!(search = S::NAME, "Disposed with work outstanding");
            inner.state.phase = SearchPhase::Cancelled;
        }
        inner.state.is_loading = false;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn snapshot(&self) -> SearchState<S::Attributes> {
        self.shared.lock().state.clone()
    }

    pub fn results(&self) -> Vec<ResourceEnvelope<S::Attributes>> {
        self.shared.lock().state.results.clone()
    }

    pub fn query(&self) -> String {
        self.shared.lock().state.query.clone()
    }

    pub fn pagination(&self) -> Option<PaginationMeta> {
        self.shared.lock().state.pagination.clone()
    }

    pub fn meta(&self) -> Option<AutocompleteMeta> {
        self.shared.lock().state.meta.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.lock().state.is_loading
    }

    pub fn last_error(&self) -> Option<SessionError> {
        self.shared.lock().state.last_error.clone()
    }

    pub fn phase(&self) -> SearchPhase {
        self.shared.lock().state.phase
    }

    pub fn has_results(&self) -> bool {
        !self.shared.lock().state.results.is_empty()
    }

    /// `total_items` of the last pagination block, 0 without one.
    pub fn total_results(&self) -> u32 {
        self.shared
            .lock()
            .state
            .pagination
            .as_ref()
            .map_or(0, |p| p.total_items)
    }

    pub fn has_pending_timer(&self) -> bool {
        self.shared.lock().pending.is_some()
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.shared.lock().in_flight.is_some()
    }
}

impl<S: SearchSource> Drop for DebouncedSearch<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
