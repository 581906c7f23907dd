use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A request for a confidential counsellor session.
///
/// Created once; the counsellor's office confirms the time out of band via
/// the student's email, so nothing is read back after submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub counsellor_id: String,
    #[ts(type = "string")]
    pub preferred_date: jiff::civil::Date,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    /// When set, the counsellor sees only the student's alias until the
    /// student chooses otherwise.
    pub anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<jiff::Timestamp>,
}

impl BookingRequest {
    pub fn new(
        user_id: Uuid,
        counsellor_id: &str,
        preferred_date: jiff::civil::Date,
        notes: Option<&str>,
        anonymous: bool,
    ) -> Self {
        Self {
            id: None,
            user_id,
            counsellor_id: counsellor_id.to_string(),
            preferred_date,
            notes: notes.map(str::to_string),
            anonymous,
            created_at: None,
        }
    }
}
