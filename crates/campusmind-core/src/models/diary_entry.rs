use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A private journal entry.
///
/// `content` is rich-text HTML produced by the frontend editor and treated
/// as an opaque string here. Entries are created once and listed newest
/// entry date first; the client never edits or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiaryEntry {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub content: String,
    #[ts(type = "string")]
    pub entry_date: jiff::civil::Date,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl DiaryEntry {
    pub fn new(user_id: Uuid, content: &str, entry_date: jiff::civil::Date) -> Self {
        Self {
            id: None,
            user_id,
            content: content.to_string(),
            entry_date,
            created_at: None,
        }
    }
}
