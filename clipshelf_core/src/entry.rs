//! Persisted record types: saved videos and categories.

use crate::resolver::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title used when an entry is saved without one.
pub const UNTITLED: &str = "Untitled Video";

/// A saved video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    pub platform: Platform,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a [`VideoEntry`]; id and timestamp are assigned by the
/// library.
#[derive(Debug, Clone, Default)]
pub struct NewVideo {
    pub url: String,
    pub title: Option<String>,
    pub thumbnail_url: String,
    pub channel_name: Option<String>,
    pub channel_url: Option<String>,
    pub category_id: Option<Uuid>,
}

/// A user-defined tag for grouping videos. `color` is an HSL triplet string
/// (e.g. `"340 82% 52%"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Category {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Categories seeded into a brand-new library.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Music", "340 82% 52%"),
        Category::new("Education", "200 98% 39%"),
        Category::new("Entertainment", "262 83% 58%"),
    ]
}
