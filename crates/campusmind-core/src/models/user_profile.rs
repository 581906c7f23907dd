use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The current platform user, as returned by the platform's
/// current-user endpoint.
///
/// `full_name` and `email` come from the hosting platform's account
/// system; everything else is set through the profile page. The alias is
/// the only name ever shown in forums and chats.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    /// Anonymous display name used in forums and chats.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alias: Option<String>,
    /// Personal name the user gave their companion bot.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub chatbot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub institution_id: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub consent_flags: ConsentFlags,
}

/// Privacy opt-ins, all off by default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsentFlags {
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub chat_logging: bool,
}

/// Partial update for the current user. Unset fields are left untouched
/// by the platform.
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatbot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_flags: Option<ConsentFlags>,
}
