#![allow(dead_code)]

use async_trait::async_trait;
use campus_api::{ApiError, ChatTransport};
use campus_types::{AssistantReply, ChatRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Transport that holds every request open until the test releases it
pub struct GatedTransport {
    calls: AtomicUsize,
    entered: Notify,
    release: Notify,
    session_id: String,
}

impl GatedTransport {
    pub fn new(session_id: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
            session_id: session_id.to_string(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Resolves once a request has reached the transport
    pub async fn wait_until_called(&self) {
        self.entered.notified().await;
    }

    /// Let one pending (or the next) request complete
    pub fn release_one(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl ChatTransport for GatedTransport {
    async fn send(&self, request: &ChatRequest) -> Result<AssistantReply, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(AssistantReply::new(format!("echo: {}", request.message))
            .with_session_id(self.session_id.as_str()))
    }
}
