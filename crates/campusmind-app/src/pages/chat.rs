//! Chat page: opens a companion session over the platform-backed stores.

use std::sync::Arc;

use campusmind_backend::client::BackendClient;
use campusmind_chat::error::ChatError;
use campusmind_chat::session::{ChatSession, WallClockSessionIds};

use crate::stores::BackendStores;

/// Open a fresh chat session for the signed-in user. Every visit to the
/// page starts a new conversation; sessions are never resumed.
pub async fn open_session(client: &BackendClient) -> Result<ChatSession, ChatError> {
    let stores = Arc::new(BackendStores::new(client.clone()));
    ChatSession::start(
        stores.as_ref(),
        stores.clone(),
        stores.clone(),
        &WallClockSessionIds,
    )
    .await
}
