use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A relaxation-library item. The catalogue is maintained on the
/// platform; this client only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub category: ResourceCategory,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Audio,
    Video,
    Article,
}

/// Library tab the resource is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Sleep,
    Anxiety,
    Focus,
    Breathing,
}
