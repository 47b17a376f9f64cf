//! Core types for the campus assistant client
//!
//! This crate provides the data model shared by the network layer, the chat
//! session client and the terminal front end.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod catalog;

pub use catalog::{Booking, Event, Facility};

// ============================================================================
// Constants
// ============================================================================

/// Base URL used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Text shown in place of an assistant reply whose body carried no text
pub const EMPTY_REPLY_TEXT: &str = "No response from assistant.";

// ============================================================================
// Serde helpers
// ============================================================================

/// Helper function to deserialize string or null values
pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

// ============================================================================
// Transcript Types
// ============================================================================

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the in-memory transcript.
///
/// Created when a message is sent or a reply is received and never modified
/// afterwards, so the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    role: Role,
    text: String,
    sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

// ============================================================================
// Session Types
// ============================================================================

/// Opaque identifier the backend uses to correlate chat exchanges
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(String);

impl SessionHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionHandle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Serialized as `null` until the conversation is bound
    pub session_id: Option<SessionHandle>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: Option<SessionHandle>) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Reply produced by the assistant service.
///
/// Only `response` carries meaning for the client; `intent`, `data` and
/// `requires_confirmation` are passed through untouched. Unknown fields are
/// ignored so newer backends keep working.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssistantReply {
    #[serde(rename = "response", default, deserialize_with = "deserialize_string_or_null")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_confirmation: Option<bool>,
}

impl AssistantReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_session_id(mut self, session_id: impl Into<SessionHandle>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Text to show in the transcript, never empty
    pub fn display_text(&self) -> &str {
        if self.text.trim().is_empty() {
            EMPTY_REPLY_TEXT
        } else {
            &self.text
        }
    }

    /// Session id suitable for binding, ignoring blank values
    pub fn bindable_session_id(&self) -> Option<&SessionHandle> {
        self.session_id.as_ref().filter(|id| !id.is_empty())
    }

    pub fn requires_confirmation(&self) -> bool {
        self.requires_confirmation.unwrap_or(false)
    }
}
