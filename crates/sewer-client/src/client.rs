//! # API Client
//!
//! Configured HTTP client for the directory backend.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ApiClient::get_json                            │
//! │                                                                         │
//! │  validate params ──► build URL (base + path + segments + query)        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌──────────┐   Ok 2xx    ┌──────────────┐                             │
//! │  │ attempt  │────────────►│ decode JSON  │──► Ok(T)                    │
//! │  │  (GET)   │             └──────────────┘                             │
//! │  └────┬─────┘                                                           │
//! │       │ error                                                           │
//! │       ▼                                                                 │
//! │  error.code == "9508"? ──yes──► emit Expired ──► Err(SessionExpired)  │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  retryable && attempts left? ──yes──► sleep(delay) ──► attempt         │
//! │       │ no                          (abort signal wins the race)       │
//! │       ▼                                                                 │
//! │  Err(error)                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The abort signal is checked before every attempt and raced against both
//! the request and the retry delay, so a cancelled request always resolves
//! to [`ClientError::Cancelled`].

use backoff::backoff::{Backoff, Constant};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use url::Url;

use sewer_core::validation::{validate_page, validate_per_page, validate_slug};
use sewer_core::{
    CompaniesApiResponse, LocationAutocompleteResponse, StatesApiResponse, LOGIN_PATH,
    SESSION_EXPIRED_CODE,
};

use crate::config::{ClientConfig, RetrySettings};
use crate::error::{ClientError, ClientResult};
use crate::events::{NoOpHandler, SessionEvent, SessionEventHandler};
use crate::http::{AbortSignal, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

const STATES_PATH: &str = "/api/v1/states";
const LOCATIONS_AUTOCOMPLETE_PATH: &str = "/api/v1/locations/autocomplete";

/// Cloneable handle to the configured backend client.
///
/// Clones share the transport and the event handler.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    header: Option<(String, String)>,
    retry: RetrySettings,
    events: Arc<dyn SessionEventHandler>,
    intercept_session_expiry: bool,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("header", &self.header.as_ref().map(|(name, _)| name))
            .field("retry", &self.retry)
            .field("intercept_session_expiry", &self.intercept_session_expiry)
            .finish()
    }
}

impl ApiClient {
    /// Creates the authenticated client over reqwest.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates the public client: no identifying header, no session-expiry
    /// interception.
    pub fn public(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config)?.into_public())
    }

    /// Creates the authenticated client over a caller-supplied transport.
    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> ClientResult<Self> {
        config.validate()?;

        Ok(Self {
            transport,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            header: Some((
                config.api.header_name.clone(),
                config.api.header_value.clone(),
            )),
            retry: config.retry.clone(),
            events: Arc::new(NoOpHandler),
            intercept_session_expiry: true,
        })
    }

    /// Replaces the handler notified of session events.
    pub fn with_event_handler(mut self, handler: Arc<dyn SessionEventHandler>) -> Self {
        self.events = handler;
        self
    }

    /// Drops the identifying header and the session-expiry interceptor.
    pub fn into_public(mut self) -> Self {
        self.header = None;
        self.intercept_session_expiry = false;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_public(&self) -> bool {
        self.header.is_none()
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    /// `GET /api/v1/states?page&per_page`
    pub async fn list_states(&self, page: u32, per_page: u32) -> ClientResult<StatesApiResponse> {
        validate_page(page)?;
        validate_per_page(per_page)?;

        let query = [("page", page.to_string()), ("per_page", per_page.to_string())];
        self.get_json(STATES_PATH, &query, &AbortSignal::never())
            .await
    }

    /// `GET /api/v1/states?state=<query>[&country=<country>]`
    pub async fn search_states(
        &self,
        query: &str,
        country: Option<&str>,
        signal: &AbortSignal,
    ) -> ClientResult<StatesApiResponse> {
        let mut params = vec![("state", query.to_string())];
        if let Some(country) = country.filter(|c| !c.trim().is_empty()) {
            params.push(("country", country.to_string()));
        }

        self.get_json(STATES_PATH, &params, signal).await
    }

    /// `GET /api/v1/states/{state_slug}/companies?page&per_page[&city=]`
    pub async fn list_companies(
        &self,
        state_slug: &str,
        city_slug: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> ClientResult<CompaniesApiResponse> {
        validate_slug("state_slug", state_slug)?;
        if let Some(city) = city_slug {
            validate_slug("city_slug", city)?;
        }
        validate_page(page)?;
        validate_per_page(per_page)?;

        let mut params = vec![("page", page.to_string()), ("per_page", per_page.to_string())];
        if let Some(city) = city_slug {
            params.push(("city", city.to_string()));
        }

        self.request_json(
            STATES_PATH,
            &[state_slug, "companies"],
            &params,
            &AbortSignal::never(),
        )
        .await
    }

    /// `GET /api/v1/locations/autocomplete?q&limit`
    pub async fn autocomplete_locations(
        &self,
        q: &str,
        limit: u32,
        signal: &AbortSignal,
    ) -> ClientResult<LocationAutocompleteResponse> {
        let params = [("q", q.to_string()), ("limit", limit.to_string())];
        self.get_json(LOCATIONS_AUTOCOMPLETE_PATH, &params, signal)
            .await
    }

    // =========================================================================
    // Request Pipeline
    // =========================================================================

    /// Issues a GET with retry and decodes the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        signal: &AbortSignal,
    ) -> ClientResult<T> {
        self.request_json(path, &[], query, signal).await
    }

    /// Like [`get_json`](Self::get_json), with `segments` appended to `path`
    /// one percent-encoded segment each.
    async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        segments: &[&str],
        query: &[(&str, String)],
        signal: &AbortSignal,
    ) -> ClientResult<T> {
        let request = HttpRequest {
            url: self.endpoint_url(path, segments, query)?.to_string(),
            headers: self.header.iter().cloned().collect(),
        };

        let body = self.send_with_retry(&request, signal).await?;
        serde_json::from_str(&body).map_err(|e| {
            error!(url = %request.url, error = %e, "Response did not match contract");
            ClientError::from(e)
        })
    }

    fn endpoint_url(
        &self,
        path: &str,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> ClientResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
                .pop_if_empty()
                .extend(segments);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn send_with_retry(&self, request: &HttpRequest, signal: &AbortSignal) -> ClientResult<String> {
        let mut delays = Constant::new(self.retry.delay());
        let mut attempt: u32 = 0;

        loop {
            if signal.is_aborted() {
                debug!(url = %request.url, "Request aborted before attempt");
                return Err(ClientError::Cancelled);
            }

            attempt += 1;
            debug!(url = %request.url, attempt, "GET");

            let outcome = tokio::select! {
                biased;
                _ = signal.aborted() => return Err(ClientError::Cancelled),
                result = self.transport.get(request) => {
                    result.and_then(|response| self.check_response(response))
                }
            };

            let err = match outcome {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            if err.is_retryable() && attempt <= self.retry.max_retries {
                let delay = delays.next_backoff().unwrap_or_else(|| self.retry.delay());
                warn!(
                    url = %request.url,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Request failed, retrying"
                );

                tokio::select! {
                    biased;
                    _ = signal.aborted() => return Err(ClientError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
                continue;
            }

            if let ClientError::SessionExpired { redirect_to } = &err {
                info!(redirect_to = %redirect_to, "Session expired");
                self.events.handle(SessionEvent::Expired {
                    redirect_to: redirect_to.clone(),
                });
            } else {
                error!(url = %request.url, attempt, error = %err, "Request failed");
            }
            return Err(err);
        }
    }

    /// Turns a non-success response into the matching error.
    fn check_response(&self, response: HttpResponse) -> ClientResult<String> {
        if response.is_success() {
            return Ok(response.body);
        }

        let parsed: Option<serde_json::Value> = serde_json::from_str(&response.body).ok();

        if self.intercept_session_expiry {
            let code = parsed
                .as_ref()
                .and_then(|v| v.pointer("/error/code"))
                .and_then(|c| c.as_str());
            if code == Some(SESSION_EXPIRED_CODE) {
                return Err(ClientError::SessionExpired {
                    redirect_to: LOGIN_PATH.to_string(),
                });
            }
        }

        let message = parsed
            .as_ref()
            .and_then(|v| {
                v.pointer("/error/message")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
            })
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {}", response.status));

        Err(ClientError::Http {
            status: response.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockReply, MockTransport, RecordingHandler, RequestOutcome};
    use serde_json::json;
    use std::time::Duration;
    use tokio::time::Instant;

    fn client_with(transport: &Arc<MockTransport>) -> ApiClient {
        ApiClient::with_transport(&ClientConfig::default(), transport.clone()).unwrap()
    }

    fn states_body() -> serde_json::Value {
        json!({
            "data": [{
                "id": "5",
                "type": "state",
                "attributes": {
                    "name": "California",
                    "code": "CA",
                    "slug": "california",
                    "companies_count": 12,
                    "country": { "id": 1, "name": "United States", "code": "US", "slug": "united-states" }
                }
            }],
            "meta": {
                "pagination": {
                    "current_page": 1,
                    "prev_page": null,
                    "next_page": 2,
                    "total_items": 40,
                    "total_pages": 2
                }
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_states_builds_request() {
        let transport = MockTransport::new(vec![MockReply::json(200, states_body())]);
        let client = client_with(&transport);

        let response = client.list_states(1, 20).await.unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].attributes.slug, "california");
        assert!(response.pagination().unwrap().has_next());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "http://localhost:3000/api/v1/states?page=1&per_page=20"
        );
        assert_eq!(requests[0].header("Slr"), Some("XYZWAYW1AA"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_companies_with_city() {
        let transport = MockTransport::new(vec![MockReply::json(200, json!({ "data": null }))]);
        let client = client_with(&transport);

        let response = client
            .list_companies("california", Some("los-angeles"), 2, 10)
            .await
            .unwrap();
        assert!(response.data.is_empty());
        assert!(response.pagination().is_none());

        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:3000/api/v1/states/california/companies?page=2&per_page=10&city=los-angeles"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_and_autocomplete_query_params() {
        let transport = MockTransport::new(vec![
            MockReply::json(200, json!({ "data": [] })),
            MockReply::json(200, json!({ "data": [] })),
        ]);
        let client = client_with(&transport);
        let signal = AbortSignal::never();

        client.search_states("new y", Some("us"), &signal).await.unwrap();
        client.autocomplete_locations("san", 10, &signal).await.unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "http://localhost:3000/api/v1/states?state=new+y&country=us"
        );
        assert_eq!(
            requests[1].url,
            "http://localhost:3000/api/v1/locations/autocomplete?q=san&limit=10"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_params_never_reach_network() {
        let transport = MockTransport::new(vec![]);
        let client = client_with(&transport);

        let err = client.list_states(0, 20).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        let err = client.list_states(1, 0).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        let err = client.list_companies("", None, 1, 20).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        let err = client
            .list_companies("texas", Some(" "), 1, 20)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));

        assert!(transport.requests().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_large_page_size_and_raw_slugs_are_sent() {
        let transport = MockTransport::new(vec![]);
        let client = client_with(&transport);

        client.list_states(1, 150).await.unwrap();
        client
            .list_companies("New York", Some("st. louis"), 1, 500)
            .await
            .unwrap();
        client
            .list_companies("north/dakota", None, 1, 20)
            .await
            .unwrap();

        assert_eq!(
            transport.urls(),
            vec![
                "http://localhost:3000/api/v1/states?page=1&per_page=150",
                "http://localhost:3000/api/v1/states/New%20York/companies?page=1&per_page=500&city=st.+louis",
                "http://localhost:3000/api/v1/states/north%2Fdakota/companies?page=1&per_page=20",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_then_succeeds() {
        let transport = MockTransport::new(vec![
            MockReply::json(503, json!({})),
            MockReply::network("connection reset"),
            MockReply::json(200, states_body()),
        ]);
        let client = client_with(&transport);

        let started = Instant::now();
        let response = client.list_states(1, 20).await.unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(transport.requests().len(), 3);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1100), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_exhausted() {
        let transport = MockTransport::new(vec![
            MockReply::json(500, json!({ "message": "boom" })),
            MockReply::json(500, json!({ "message": "boom" })),
            MockReply::json(500, json!({ "message": "boom" })),
            MockReply::json(200, states_body()),
        ]);
        let client = client_with(&transport);

        let err = client.list_states(1, 20).await.unwrap_err();
        match err {
            ClientError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_status_fails_once() {
        let transport = MockTransport::new(vec![MockReply::json(
            404,
            json!({ "error": { "code": "404", "message": "State not found" } }),
        )]);
        let client = client_with(&transport);

        let err = client.list_companies("atlantis", None, 1, 20).await.unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP 404: State not found");
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_expired_notifies_once() {
        let transport = MockTransport::new(vec![MockReply::json(
            401,
            json!({ "error": { "code": "9508", "message": "Session expired" } }),
        )]);
        let handler = Arc::new(RecordingHandler::default());
        let client = client_with(&transport).with_event_handler(handler.clone());

        let err = client.list_states(1, 20).await.unwrap_err();
        assert!(err.is_session_expired());
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(
            handler.events(),
            vec![SessionEvent::Expired {
                redirect_to: "/login".into()
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_expiry_code_on_retryable_status() {
        let transport = MockTransport::new(vec![MockReply::json(
            503,
            json!({ "error": { "code": "9508" } }),
        )]);
        let handler = Arc::new(RecordingHandler::default());
        let client = client_with(&transport).with_event_handler(handler.clone());

        let err = client.list_states(1, 20).await.unwrap_err();
        assert!(err.is_session_expired());
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(handler.events().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_public_client_skips_header_and_interceptor() {
        let transport = MockTransport::new(vec![MockReply::json(
            401,
            json!({ "error": { "code": "9508" } }),
        )]);
        let handler = Arc::new(RecordingHandler::default());
        let client = client_with(&transport)
            .with_event_handler(handler.clone())
            .into_public();
        assert!(client.is_public());

        let err = client.list_states(1, 20).await.unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 401, .. }));
        assert!(handler.events().is_empty());
        assert_eq!(transport.requests()[0].header("Slr"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_send() {
        let transport = MockTransport::new(vec![MockReply::json(200, json!({ "data": [] }))]);
        let client = client_with(&transport);

        let controller = crate::http::AbortController::new();
        controller.abort();

        let err = client
            .autocomplete_locations("san", 10, &controller.signal())
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_in_flight() {
        let transport = MockTransport::new(vec![MockReply::json(200, json!({ "data": [] }))
            .delayed(Duration::from_secs(5))]);
        let client = client_with(&transport);

        let controller = crate::http::AbortController::new();
        let signal = controller.signal();
        let request = tokio::spawn({
            let client = client.clone();
            async move { client.autocomplete_locations("san", 10, &signal).await }
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.abort();

        let err = request.await.unwrap().unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(transport.outcomes(), vec![RequestOutcome::Dropped]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_during_retry_delay() {
        let transport = MockTransport::new(vec![
            MockReply::json(503, json!({})),
            MockReply::json(200, json!({ "data": [] })),
        ]);
        let client = client_with(&transport);

        let controller = crate::http::AbortController::new();
        let signal = controller.signal();
        let request = tokio::spawn({
            let client = client.clone();
            async move { client.search_states("cal", None, &signal).await }
        });

        tokio::time::sleep(Duration::from_millis(200)).await;
        controller.abort();

        let err = request.await.unwrap().unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_decode_failure() {
        let transport = MockTransport::new(vec![MockReply::raw(200, "<html>oops</html>")]);
        let client = client_with(&transport);

        let err = client.list_states(1, 20).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_base_url_with_prefix_and_trailing_slash() {
        let transport = MockTransport::new(vec![MockReply::json(200, json!({ "data": [] }))]);
        let mut config = ClientConfig::default();
        config.api.base_url = Some("https://api.example.com/backend/".into());
        let client = ApiClient::with_transport(&config, transport.clone()).unwrap();

        client.list_states(3, 50).await.unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "https://api.example.com/backend/api/v1/states?page=3&per_page=50"
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let transport = MockTransport::new(vec![]);
        let mut config = ClientConfig::default();
        config.api.base_url = Some("ftp://example.com".into());

        let err = ApiClient::with_transport(&config, transport).unwrap_err();
        assert!(err.is_config_error());
    }
}
