use campus_api::{ApiError, ChatTransport};
use campus_types::{AssistantReply, ChatRequest, SessionHandle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Shown in place of a reply when the exchange failed for any reason
pub const FALLBACK_REPLY_TEXT: &str = "⚠️ Cannot connect to the campus assistant.\n\n\
    Check:\n\
    • Backend is running\n\
    • The API URL is correct";

/// Why a message was not sent. Neither case touches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRejected {
    #[error("message is empty")]
    EmptyInput,
    #[error("a previous message is still waiting for a reply")]
    RequestInFlight,
}

/// Session binding of one conversation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Bound(SessionHandle),
}

impl SessionState {
    pub fn session_id(&self) -> Option<&SessionHandle> {
        match self {
            SessionState::Uninitialized => None,
            SessionState::Bound(id) => Some(id),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, SessionState::Bound(_))
    }
}

/// Outcome of an accepted send
#[derive(Debug)]
pub enum Exchange {
    Replied(AssistantReply),
    /// Transport, status and decode failures all end up here. The error is
    /// kept for logging only.
    Fallback(ApiError),
}

impl Exchange {
    /// Text for the assistant's transcript entry
    pub fn display_text(&self) -> &str {
        match self {
            Exchange::Replied(reply) => reply.display_text(),
            Exchange::Fallback(_) => FALLBACK_REPLY_TEXT,
        }
    }

    pub fn reply(&self) -> Option<&AssistantReply> {
        match self {
            Exchange::Replied(reply) => Some(reply),
            Exchange::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Exchange::Fallback(_))
    }
}

/// Clears the in-flight flag however the send ends, including when the
/// future is dropped mid-request.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Keeps a conversation attached to a single backend session.
///
/// - At most one request is outstanding at a time.
/// - The first successful reply that carries a session id binds the
///   conversation to it; later ids from the server are ignored.
/// - Failures never retry and never change the binding.
pub struct ChatSessionClient<T> {
    transport: T,
    state: Mutex<SessionState>,
    in_flight: AtomicBool,
}

impl<T: ChatTransport> ChatSessionClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: Mutex::new(SessionState::Uninitialized),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn state(&self) -> SessionState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn session_id(&self) -> Option<SessionHandle> {
        self.state().session_id().cloned()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Send one user message and wait for the reply.
    ///
    /// `text` is trimmed first. Empty text and sends that overlap an
    /// outstanding request are rejected without a network call; every other
    /// failure comes back as [`Exchange::Fallback`].
    pub async fn send_message(&self, text: &str) -> Result<Exchange, SendRejected> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SendRejected::EmptyInput);
        }

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(SendRejected::RequestInFlight)?;

        let request = ChatRequest::new(text, self.session_id());
        log::debug!(
            "Sending chat message ({} chars, session {:?})",
            text.chars().count(),
            request.session_id.as_ref().map(SessionHandle::as_str)
        );

        match self.transport.send(&request).await {
            Ok(reply) => {
                self.bind(reply.bindable_session_id());
                Ok(Exchange::Replied(reply))
            }
            Err(error) => {
                log::warn!("Chat request failed: {}", error);
                Ok(Exchange::Fallback(error))
            }
        }
    }

    fn bind(&self, candidate: Option<&SessionHandle>) {
        let Some(candidate) = candidate else {
            return;
        };

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            SessionState::Uninitialized => {
                log::info!("Conversation bound to session {}", candidate);
                *state = SessionState::Bound(candidate.clone());
            }
            SessionState::Bound(existing) if existing != candidate => {
                log::debug!(
                    "Ignoring session {} from server, conversation stays on {}",
                    candidate,
                    existing
                );
            }
            SessionState::Bound(_) => {}
        }
    }
}
