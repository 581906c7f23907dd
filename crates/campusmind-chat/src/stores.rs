//! Interfaces the chat session consumes.
//!
//! The controller never talks to the platform directly; it sees these
//! traits, which the app layer implements over the backend client and
//! tests implement in memory.

use async_trait::async_trait;

use campusmind_core::models::chat_message::ChatMessage;
use campusmind_core::models::user_profile::UserProfile;

use crate::error::ChatError;

/// Read access to the signed-in user's profile.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch_current(&self) -> Result<UserProfile, ChatError>;
}

/// Append-only persistence for chat messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist one message. Returns the persisted form (platform-assigned
    /// id and timestamp); the session keeps its own in-memory copy.
    async fn append(&self, message: ChatMessage) -> Result<ChatMessage, ChatError>;
}

/// Stateless plain-text completion.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}
