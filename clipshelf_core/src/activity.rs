//! Append-only activity log recorded alongside library mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    VideoAdded,
    VideoRemoved,
    CategoryAdded,
    CategoryUpdated,
    CategoryRemoved,
}

impl ActivityAction {
    pub fn entity_type(self) -> &'static str {
        match self {
            ActivityAction::VideoAdded | ActivityAction::VideoRemoved => "video",
            ActivityAction::CategoryAdded
            | ActivityAction::CategoryUpdated
            | ActivityAction::CategoryRemoved => "category",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityAction::VideoAdded => "video_added",
            ActivityAction::VideoRemoved => "video_removed",
            ActivityAction::CategoryAdded => "category_added",
            ActivityAction::CategoryUpdated => "category_updated",
            ActivityAction::CategoryRemoved => "category_removed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: Uuid,
    pub action: ActivityAction,
    pub entity_type: String,
    #[serde(default)]
    pub entity_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ActivityEvent {
    pub fn new(action: ActivityAction, entity_id: Option<Uuid>, detail: Option<String>) -> Self {
        ActivityEvent {
            id: Uuid::new_v4(),
            action,
            entity_type: action.entity_type().to_string(),
            entity_id,
            detail,
            created_at: Utc::now(),
        }
    }
}
