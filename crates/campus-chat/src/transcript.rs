use campus_api::ChatTransport;
use campus_types::ChatMessage;

use crate::session::{ChatSessionClient, Exchange, SendRejected};

/// In-memory list of what was said, oldest first. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::user(text))
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::assistant(text))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A session client together with the transcript its caller keeps.
///
/// Each accepted send appends exactly one user entry followed by exactly
/// one assistant entry, the real reply or the fallback text.
pub struct Conversation<T> {
    client: ChatSessionClient<T>,
    transcript: Transcript,
}

impl<T: ChatTransport> Conversation<T> {
    pub fn new(transport: T) -> Self {
        Self {
            client: ChatSessionClient::new(transport),
            transcript: Transcript::new(),
        }
    }

    /// Start the transcript with an assistant greeting. Nothing is sent.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.transcript.push_assistant(greeting);
        self
    }

    pub fn client(&self) -> &ChatSessionClient<T> {
        &self.client
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub async fn send(&mut self, text: &str) -> Result<Exchange, SendRejected> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SendRejected::EmptyInput);
        }

        // Both entries land together so an abandoned send leaves no trace
        let user = ChatMessage::user(trimmed);
        let exchange = self.client.send_message(trimmed).await?;
        self.transcript.push(user);
        self.transcript.push_assistant(exchange.display_text());

        Ok(exchange)
    }
}
