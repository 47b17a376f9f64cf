//! Conversation management for the campus assistant
//!
//! This crate provides the chat session client, which keeps a conversation
//! bound to one backend session, and the in-memory transcript its callers
//! append to.

pub mod session;
pub mod transcript;

pub use session::{ChatSessionClient, Exchange, SendRejected, SessionState, FALLBACK_REPLY_TEXT};
pub use transcript::{Conversation, Transcript};
