use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: i32,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub link_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: i32,
    // A slide without the flag counts as active.
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn default_active() -> bool {
    true
}

/// Body of `POST /api/slides` and `PUT /api/slides/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub order: i32,
    pub is_active: bool,
}
