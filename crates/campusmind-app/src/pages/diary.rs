//! Diary page: the user's private journal.

use serde_json::json;
use tracing::info;

use campusmind_backend::client::BackendClient;
use campusmind_backend::error::BackendError;
use campusmind_backend::{entities, users};
use campusmind_core::collections;
use campusmind_core::models::diary_entry::DiaryEntry;
use campusmind_core::models::user_profile::UserProfile;

/// List the signed-in user's own entries, newest entry date first.
pub async fn load(client: &BackendClient) -> Result<Vec<DiaryEntry>, BackendError> {
    let user = users::me(client).await?;
    entities::query(
        client,
        collections::DIARY_ENTRIES,
        json!({ "user_id": user.id }),
        Some("-entry_date"),
    )
    .await
}

/// Save a new entry dated today. Content that trims to nothing is a
/// silent no-op, mirroring the editor's disabled save button.
pub async fn save(
    client: &BackendClient,
    user: &UserProfile,
    content: &str,
) -> Result<Option<DiaryEntry>, BackendError> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    let entry = DiaryEntry::new(user.id, content, jiff::Zoned::now().date());
    let saved = entities::create(client, collections::DIARY_ENTRIES, &entry).await?;
    info!(user_id = %user.id, "diary entry saved");
    Ok(Some(saved))
}
