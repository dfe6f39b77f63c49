//! Scripted transport and recording handler shared by the crate's tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::events::{SessionEvent, SessionEventHandler};
use crate::http::{HttpRequest, HttpResponse, HttpTransport};

/// One scripted answer, consumed in request order.
#[derive(Debug, Clone)]
pub(crate) struct MockReply {
    outcome: Result<HttpResponse, String>,
    delay: Duration,
}

impl MockReply {
    pub(crate) fn json(status: u16, body: serde_json::Value) -> Self {
        Self::raw(status, &body.to_string())
    }

    pub(crate) fn raw(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn network(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            delay: Duration::ZERO,
        }
    }

    /// Holds the reply until `delay` has elapsed (virtual time under
    /// `start_paused`).
    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// How a recorded request's future ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestOutcome {
    /// Still being polled.
    Pending,
    /// Ran to completion and handed back its reply.
    Completed,
    /// Dropped before completing, as an aborted request is.
    Dropped,
}

/// Marks its request `Dropped` unless it was marked `Completed` first.
struct OutcomeGuard<'a> {
    outcomes: &'a Mutex<Vec<RequestOutcome>>,
    index: usize,
}

impl Drop for OutcomeGuard<'_> {
    fn drop(&mut self) {
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes[self.index] == RequestOutcome::Pending {
            outcomes[self.index] = RequestOutcome::Dropped;
        }
    }
}

/// Transport answering from a script and recording every request.
///
/// Once the script runs out every request gets `200 {"data": []}`.
#[derive(Default)]
pub(crate) struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<HttpRequest>>,
    outcomes: Mutex<Vec<RequestOutcome>>,
}

impl MockTransport {
    pub(crate) fn new(replies: Vec<MockReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            ..Self::default()
        })
    }

    /// One entry per request, in request order.
    pub(crate) fn outcomes(&self) -> Vec<RequestOutcome> {
        self.outcomes.lock().unwrap().clone()
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, request: &HttpRequest) -> ClientResult<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let guard = {
            let mut outcomes = self.outcomes.lock().unwrap();
            outcomes.push(RequestOutcome::Pending);
            OutcomeGuard {
                outcomes: &self.outcomes,
                index: outcomes.len() - 1,
            }
        };
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::raw(200, r#"{"data":[]}"#));

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        self.outcomes.lock().unwrap()[guard.index] = RequestOutcome::Completed;
        reply.outcome.map_err(ClientError::Network)
    }
}

/// Handler that keeps every event it receives.
#[derive(Default)]
pub(crate) struct RecordingHandler {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingHandler {
    pub(crate) fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SessionEventHandler for RecordingHandler {
    fn handle(&self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
