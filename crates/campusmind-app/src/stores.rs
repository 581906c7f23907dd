//! Adapters binding the chat session's interfaces to the hosted platform.

use async_trait::async_trait;

use campusmind_backend::client::BackendClient;
use campusmind_backend::{entities, integrations, users};
use campusmind_chat::error::ChatError;
use campusmind_chat::stores::{CompletionService, MessageStore, ProfileStore};
use campusmind_core::collections;
use campusmind_core::models::chat_message::ChatMessage;
use campusmind_core::models::user_profile::UserProfile;

/// One backing object for all three chat interfaces, so a single
/// `Arc<BackendStores>` can be handed to the session as each of them.
pub struct BackendStores {
    client: BackendClient,
}

impl BackendStores {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileStore for BackendStores {
    async fn fetch_current(&self) -> Result<UserProfile, ChatError> {
        users::me(&self.client)
            .await
            .map_err(|e| ChatError::Profile(e.to_string()))
    }
}

#[async_trait]
impl MessageStore for BackendStores {
    async fn append(&self, message: ChatMessage) -> Result<ChatMessage, ChatError> {
        entities::create(&self.client, collections::CHAT_MESSAGES, &message)
            .await
            .map_err(|e| ChatError::Store(e.to_string()))
    }
}

#[async_trait]
impl CompletionService for BackendStores {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        integrations::invoke_llm(&self.client, prompt)
            .await
            .map_err(|e| ChatError::Completion(e.to_string()))
    }
}
