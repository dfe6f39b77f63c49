//! # Session Events
//!
//! Signals the client raises for its host rather than acting on them itself.
//! The client never navigates; when the backend reports an expired session it
//! emits [`SessionEvent::Expired`] and the host's handler decides what a
//! redirect to the login location means (route change, CLI message, ...).
//!
//! ```text
//!   ApiClient ──emit──► SessionEventHandler ──► host navigation owner
//!       │
//!       └──Err(ClientError::SessionExpired)──► session.last_error
//! ```

use tokio::sync::mpsc;
use tracing::warn;

/// Events raised by the client outside the request/response flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the session; the host should go to `redirect_to`.
    Expired { redirect_to: String },
}

/// Receives session events (implemented by the host).
pub trait SessionEventHandler: Send + Sync {
    fn handle(&self, event: SessionEvent);
}

/// Handler that ignores every event.
pub struct NoOpHandler;

impl SessionEventHandler for NoOpHandler {
    fn handle(&self, _event: SessionEvent) {}
}

/// Forwards events to a channel drained by a top-level task.
pub struct ChannelHandler {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl ChannelHandler {
    /// Creates the handler and the receiver the host should drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SessionEventHandler for ChannelHandler {
    fn handle(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            warn!("Session event receiver dropped");
        }
    }
}
