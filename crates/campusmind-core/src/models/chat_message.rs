use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One message in a chat session between a student and their companion bot.
///
/// Messages are append-only: created once, never edited or deleted. The
/// platform assigns `id` and `created_at` on persistence, so both are
/// `None` on records built client-side.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    /// Groups messages into one conversation run. Generated client-side at
    /// session start; a reload starts a fresh session.
    pub session_id: String,
    pub sender: Sender,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl ChatMessage {
    pub fn user(user_id: Uuid, session_id: &str, text: &str) -> Self {
        Self::unsaved(user_id, session_id, Sender::User, text)
    }

    pub fn bot(user_id: Uuid, session_id: &str, text: &str) -> Self {
        Self::unsaved(user_id, session_id, Sender::Bot, text)
    }

    fn unsaved(user_id: Uuid, session_id: &str, sender: Sender, text: &str) -> Self {
        Self {
            id: None,
            user_id,
            session_id: session_id.to_string(),
            sender,
            text: text.to_string(),
            created_at: None,
        }
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    /// Lowercase form, also used for transcript lines in the chat prompt.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}
