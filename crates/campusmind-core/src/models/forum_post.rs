use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// An anonymous peer-forum post.
///
/// Only the poster's alias is ever attached — never the account identity.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumPost {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Uuid>,
    pub user_alias: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl ForumPost {
    pub fn new(user_alias: &str, title: &str, body: &str) -> Self {
        Self {
            id: None,
            user_alias: user_alias.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            upvotes: 0,
            created_at: None,
        }
    }
}
