//! # Paginated Listings
//!
//! Plain-fetch sessions for the states and companies listings.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  fetch(page?, per_page?)                                                │
//! │     │                                                                   │
//! │     ├─► record page/per_page, is_loading = true, last_error = None     │
//! │     │                                                                   │
//! │     ├─► source.fetch_page(client, page, per_page)                       │
//! │     │        │                                                          │
//! │     │        ├── Ok  ──► items, pagination, extra replaced              │
//! │     │        └── Err ──► items, pagination, extra cleared, error kept  │
//! │     │                                                                   │
//! │     └─► is_loading = false (on every path, including a dropped future) │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Concurrent fetches are not coalesced; whichever resolves last owns the
//! state.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error};

use sewer_core::{
    CityResource, CompanyAttributes, ListResponse, PaginationMeta, ResourceEnvelope,
    StateAttributes, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};

use crate::client::ApiClient;
use crate::config::ListingSettings;
use crate::error::{ClientResult, SessionError};

// =============================================================================
// Options & State
// =============================================================================

/// Initial parameters of a listing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    pub page: u32,
    pub per_page: u32,
    /// Fetch on [`Listing::init`].
    pub auto_fetch: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            auto_fetch: true,
        }
    }
}

impl From<&ListingSettings> for ListingOptions {
    fn from(settings: &ListingSettings) -> Self {
        Self {
            page: settings.page,
            per_page: settings.per_page,
            auto_fetch: true,
        }
    }
}

/// Snapshot of a listing session.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState<A, E> {
    pub items: Vec<ResourceEnvelope<A>>,
    pub pagination: Option<PaginationMeta>,
    /// Source-specific data carried by the response (cities for companies).
    pub extra: E,
    pub is_loading: bool,
    pub last_error: Option<SessionError>,
    pub page: u32,
    pub per_page: u32,
}

impl<A, E: Default> ListingState<A, E> {
    fn new(options: &ListingOptions) -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            extra: E::default(),
            is_loading: false,
            last_error: None,
            page: options.page,
            per_page: options.per_page,
        }
    }
}

// =============================================================================
// Sources
// =============================================================================

/// The endpoint a listing session reads from.
#[async_trait]
pub trait ListingSource: Send + Sync {
    type Attributes: Clone + Send + Sync;
    type Extra: Clone + Default + Send + Sync;

    /// Short label for log lines.
    fn label(&self) -> String;

    async fn fetch_page(
        &self,
        client: &ApiClient,
        page: u32,
        per_page: u32,
    ) -> ClientResult<ListResponse<Self::Attributes>>;

    /// Pulls the source-specific extra out of a successful response.
    fn extra(&self, response: &ListResponse<Self::Attributes>) -> Self::Extra;
}

/// All states, paginated.
#[derive(Debug, Clone, Default)]
pub struct AllStates;

#[async_trait]
impl ListingSource for AllStates {
    type Attributes = StateAttributes;
    type Extra = ();

    fn label(&self) -> String {
        "states".into()
    }

    async fn fetch_page(
        &self,
        client: &ApiClient,
        page: u32,
        per_page: u32,
    ) -> ClientResult<ListResponse<StateAttributes>> {
        client.list_states(page, per_page).await
    }

    fn extra(&self, _response: &ListResponse<StateAttributes>) {}
}

/// Companies of one state, optionally narrowed to a city.
#[derive(Debug, Clone)]
pub struct StateCompanies {
    pub state_slug: String,
    pub city_slug: Option<String>,
}

#[async_trait]
impl ListingSource for StateCompanies {
    type Attributes = CompanyAttributes;
    type Extra = Vec<CityResource>;

    fn label(&self) -> String {
        match &self.city_slug {
            Some(city) => format!("companies/{}/{}", self.state_slug, city),
            None => format!("companies/{}", self.state_slug),
        }
    }

    async fn fetch_page(
        &self,
        client: &ApiClient,
        page: u32,
        per_page: u32,
    ) -> ClientResult<ListResponse<CompanyAttributes>> {
        client
            .list_companies(&self.state_slug, self.city_slug.as_deref(), page, per_page)
            .await
    }

    fn extra(&self, response: &ListResponse<CompanyAttributes>) -> Vec<CityResource> {
        response.cities()
    }
}

// =============================================================================
// Listing Session
// =============================================================================

/// A paginated plain-fetch session.
pub struct Listing<S: ListingSource> {
    client: ApiClient,
    source: S,
    options: ListingOptions,
    state: RwLock<ListingState<S::Attributes, S::Extra>>,
}

/// Paginated states listing.
pub type StatesListing = Listing<AllStates>;

/// Paginated companies listing for a state (and optional city).
pub type CompaniesListing = Listing<StateCompanies>;

impl StatesListing {
    pub fn states(client: ApiClient, options: ListingOptions) -> Self {
        Self::new(client, AllStates, options)
    }
}

impl CompaniesListing {
    pub fn companies(
        client: ApiClient,
        state_slug: impl Into<String>,
        city_slug: Option<String>,
        options: ListingOptions,
    ) -> Self {
        let source = StateCompanies {
            state_slug: state_slug.into(),
            city_slug,
        };
        Self::new(client, source, options)
    }

    /// Cities embedded in the last successful response.
    pub fn cities(&self) -> Vec<CityResource> {
        self.read().extra.clone()
    }
}

impl<S: ListingSource> Listing<S> {
    pub fn new(client: ApiClient, source: S, options: ListingOptions) -> Self {
        Self {
            state: RwLock::new(ListingState::new(&options)),
            client,
            source,
            options,
        }
    }

    /// Performs the initial fetch when `auto_fetch` is set.
    pub async fn init(&self) {
        if self.options.auto_fetch {
            self.fetch(None, None).await;
        }
    }

    /// Fetches a page. Missing arguments reuse the last recorded values.
    pub async fn fetch(&self, page: Option<u32>, per_page: Option<u32>) {
        let (page, per_page) = {
            let mut state = self.write();
            if let Some(page) = page {
                state.page = page;
            }
            if let Some(per_page) = per_page {
                state.per_page = per_page;
            }
            state.is_loading = true;
            state.last_error = None;
            (state.page, state.per_page)
        };

        let _loading = LoadingGuard { state: &self.state };
        debug!(source = %self.source.label(), page, per_page, "Fetching listing");

        let result = self.source.fetch_page(&self.client, page, per_page).await;

        let mut state = self.write();
        match result {
            Ok(response) => {
                state.extra = self.source.extra(&response);
                state.pagination = response.pagination();
                state.items = response.data;
                debug!(
                    source = %self.source.label(),
                    count = state.items.len(),
                    "Listing updated"
                );
            }
            Err(err) => {
                error!(source = %self.source.label(), page, error = %err, "Listing fetch failed");
                state.items.clear();
                state.pagination = None;
                state.extra = S::Extra::default();
                state.last_error = SessionError::from_client(&err);
            }
        }
    }

    /// Re-issues the last request with identical parameters.
    pub async fn refresh(&self) {
        let (page, per_page) = {
            let state = self.read();
            (state.page, state.per_page)
        };
        self.fetch(Some(page), Some(per_page)).await;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn snapshot(&self) -> ListingState<S::Attributes, S::Extra> {
        self.read().clone()
    }

    pub fn items(&self) -> Vec<ResourceEnvelope<S::Attributes>> {
        self.read().items.clone()
    }

    pub fn pagination(&self) -> Option<PaginationMeta> {
        self.read().pagination.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().is_loading
    }

    pub fn last_error(&self) -> Option<SessionError> {
        self.read().last_error.clone()
    }

    pub fn current_page(&self) -> u32 {
        self.read().page
    }

    pub fn per_page(&self) -> u32 {
        self.read().per_page
    }

    pub fn has_next_page(&self) -> bool {
        self.read().pagination.as_ref().is_some_and(|p| p.has_next())
    }

    pub fn has_prev_page(&self) -> bool {
        self.read().pagination.as_ref().is_some_and(|p| p.has_prev())
    }

    fn read(&self) -> RwLockReadGuard<'_, ListingState<S::Attributes, S::Extra>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ListingState<S::Attributes, S::Extra>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears `is_loading` when a fetch ends, however it ends.
struct LoadingGuard<'a, A, E> {
    state: &'a RwLock<ListingState<A, E>>,
}

impl<A, E> Drop for LoadingGuard<'_, A, E> {
    fn drop(&mut self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::SessionErrorKind;
    use crate::testing::{MockReply, MockTransport};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn client_with(transport: &Arc<MockTransport>) -> ApiClient {
        ApiClient::with_transport(&ClientConfig::default(), transport.clone()).unwrap()
    }

    fn state(id: &str, name: &str, slug: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": "state",
            "attributes": {
                "name": name,
                "code": "XX",
                "slug": slug,
                "companies_count": 3,
                "country": { "id": 1, "name": "United States", "code": "US", "slug": "united-states" }
            }
        })
    }

    fn page_meta(current: u32, total_pages: u32) -> serde_json::Value {
        json!({
            "pagination": {
                "current_page": current,
                "prev_page": if current > 1 { json!(current - 1) } else { json!(null) },
                "next_page": if current < total_pages { json!(current + 1) } else { json!(null) },
                "total_items": 45,
                "total_pages": total_pages
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_replaces_items_and_pagination() {
        let transport = MockTransport::new(vec![MockReply::json(
            200,
            json!({
                "data": [state("1", "Alabama", "alabama"), state("2", "Alaska", "alaska")],
                "meta": page_meta(1, 3)
            }),
        )]);
        let listing = StatesListing::states(client_with(&transport), ListingOptions::default());

        listing.fetch(None, None).await;

        let snapshot = listing.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[1].attributes.name, "Alaska");
        assert!(!snapshot.is_loading);
        assert!(snapshot.last_error.is_none());
        assert!(listing.has_next_page());
        assert!(!listing.has_prev_page());
        assert_eq!(
            transport.urls(),
            vec!["http://localhost:3000/api/v1/states?page=1&per_page=20"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_reissues_identical_request() {
        let transport = MockTransport::new(vec![]);
        let listing = StatesListing::states(client_with(&transport), ListingOptions::default());

        listing.fetch(Some(2), Some(50)).await;
        listing.refresh().await;

        let urls = transport.urls();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], urls[1]);
        assert!(urls[0].ends_with("page=2&per_page=50"));
        assert_eq!(listing.current_page(), 2);
        assert_eq!(listing.per_page(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_absent_pagination_reads_as_none() {
        let transport = MockTransport::new(vec![MockReply::json(
            200,
            json!({ "data": [state("1", "Alabama", "alabama")] }),
        )]);
        let listing = StatesListing::states(client_with(&transport), ListingOptions::default());

        listing.fetch(None, None).await;

        assert_eq!(listing.items().len(), 1);
        assert!(listing.pagination().is_none());
        assert!(!listing.has_next_page());
        assert!(!listing.has_prev_page());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_clears_previous_results() {
        let transport = MockTransport::new(vec![
            MockReply::json(
                200,
                json!({ "data": [state("1", "Alabama", "alabama")], "meta": page_meta(1, 2) }),
            ),
            MockReply::json(404, json!({ "error": { "code": "404", "message": "Not found" } })),
        ]);
        let listing = StatesListing::states(client_with(&transport), ListingOptions::default());

        listing.fetch(None, None).await;
        assert_eq!(listing.items().len(), 1);

        listing.fetch(Some(9), None).await;
        let snapshot = listing.snapshot();
        assert!(snapshot.items.is_empty());
        assert!(snapshot.pagination.is_none());
        assert!(!snapshot.is_loading);
        let err = snapshot.last_error.unwrap();
        assert_eq!(err.kind, SessionErrorKind::Http(404));
        assert_eq!(snapshot.page, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_fetch_clears_error() {
        let transport = MockTransport::new(vec![
            MockReply::json(404, json!({})),
            MockReply::json(200, json!({ "data": [] })),
        ]);
        let listing = StatesListing::states(client_with(&transport), ListingOptions::default());

        listing.fetch(None, None).await;
        assert!(listing.last_error().is_some());

        listing.refresh().await;
        assert!(listing.last_error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_size_above_default_reaches_backend() {
        let transport = MockTransport::new(vec![]);
        let listing = StatesListing::states(client_with(&transport), ListingOptions::default());

        listing.fetch(Some(1), Some(150)).await;

        assert!(listing.last_error().is_none());
        assert_eq!(listing.per_page(), 150);
        assert_eq!(
            transport.urls(),
            vec!["http://localhost:3000/api/v1/states?page=1&per_page=150"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_page_is_recorded_without_request() {
        let transport = MockTransport::new(vec![]);
        let listing = StatesListing::states(client_with(&transport), ListingOptions::default());

        listing.fetch(Some(0), None).await;

        assert_eq!(listing.last_error().unwrap().kind, SessionErrorKind::Validation);
        assert!(!listing.is_loading());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_init_respects_auto_fetch() {
        let transport = MockTransport::new(vec![]);
        let manual = ListingOptions {
            auto_fetch: false,
            ..ListingOptions::default()
        };

        StatesListing::states(client_with(&transport), manual).init().await;
        assert!(transport.requests().is_empty());

        StatesListing::states(client_with(&transport), ListingOptions::default())
            .init()
            .await;
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_flag_while_in_flight() {
        let transport = MockTransport::new(vec![MockReply::json(200, json!({ "data": [] }))
            .delayed(Duration::from_secs(1))]);
        let listing = Arc::new(StatesListing::states(
            client_with(&transport),
            ListingOptions::default(),
        ));

        let task = tokio::spawn({
            let listing = listing.clone();
            async move { listing.fetch(None, None).await }
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(listing.is_loading());

        task.await.unwrap();
        assert!(!listing.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_cleared_when_fetch_dropped() {
        let transport = MockTransport::new(vec![MockReply::json(200, json!({ "data": [] }))
            .delayed(Duration::from_secs(10))]);
        let listing = StatesListing::states(client_with(&transport), ListingOptions::default());

        let timed_out =
            tokio::time::timeout(Duration::from_millis(100), listing.fetch(None, None)).await;
        assert!(timed_out.is_err());
        assert!(!listing.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_companies_listing_with_cities() {
        let transport = MockTransport::new(vec![MockReply::json(
            200,
            json!({
                "data": [{
                    "id": "77",
                    "type": "company",
                    "attributes": {
                        "name": "J Sewer & Drain",
                        "slug": "j-sewer-drain",
                        "phone": "(213) 555-0147",
                        "email": "",
                        "website": "",
                        "street_address": "123 Main St",
                        "zip_code": "90012",
                        "latitude": "34.05",
                        "longitude": "-118.24",
                        "description": "",
                        "average_rating": "4.8",
                        "total_reviews": 127,
                        "verified_professional": true,
                        "licensed": true,
                        "insured": true,
                        "background_checked": false,
                        "certified_partner": false,
                        "service_guarantee": true,
                        "service_level": "Premium",
                        "specialty": "Residential",
                        "created_at": "2024-01-01T00:00:00Z",
                        "updated_at": "2024-01-01T00:00:00Z",
                        "url_path": "/california/los-angeles/j-sewer-drain",
                        "full_address": "123 Main St, Los Angeles, CA 90012"
                    }
                }],
                "meta": {
                    "pagination": {
                        "current_page": 1, "prev_page": null, "next_page": null,
                        "total_items": 1, "total_pages": 1
                    },
                    "cities": {
                        "data": [{
                            "id": "10",
                            "type": "city",
                            "attributes": {
                                "name": "Los Angeles",
                                "slug": "los-angeles",
                                "companies_count": 1,
                                "country": { "id": 1, "name": "United States", "code": "US", "slug": "united-states" },
                                "state": { "id": 5, "name": "California", "code": "CA", "slug": "california" }
                            }
                        }]
                    }
                }
            }),
        )]);
        let listing = CompaniesListing::companies(
            client_with(&transport),
            "california",
            Some("los-angeles".into()),
            ListingOptions::default(),
        );

        listing.fetch(None, None).await;

        assert_eq!(listing.items().len(), 1);
        assert_eq!(listing.items()[0].attributes.slug, "j-sewer-drain");
        assert_eq!(listing.cities().len(), 1);
        assert_eq!(listing.cities()[0].attributes.slug, "los-angeles");
        assert!(!listing.has_next_page());
        assert_eq!(
            transport.urls(),
            vec!["http://localhost:3000/api/v1/states/california/companies?page=1&per_page=20&city=los-angeles"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_companies_failure_clears_cities() {
        let transport = MockTransport::new(vec![
            MockReply::json(
                200,
                json!({ "data": [], "meta": { "cities": { "data": [{
                    "id": "10",
                    "type": "city",
                    "attributes": {
                        "name": "Austin",
                        "slug": "austin",
                        "companies_count": 4,
                        "country": { "id": 1, "name": "United States", "code": "US", "slug": "united-states" },
                        "state": { "id": 9, "name": "Texas", "code": "TX", "slug": "texas" }
                    }
                }] } } }),
            ),
            MockReply::network("connection refused"),
            MockReply::network("connection refused"),
            MockReply::network("connection refused"),
        ]);
        let listing = CompaniesListing::companies(
            client_with(&transport),
            "texas",
            None,
            ListingOptions::default(),
        );

        listing.fetch(None, None).await;
        assert_eq!(listing.cities().len(), 1);

        listing.refresh().await;
        assert!(listing.cities().is_empty());
        assert_eq!(listing.last_error().unwrap().kind, SessionErrorKind::Network);
    }
}
