use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::event::{Category, Event};
use crate::models::user::UserSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: UserSummary,
    pub content: String,
    pub event_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
}

/// The slice of an event shown next to a feed entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPreview {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub category: Category,
    pub date: chrono::NaiveDate,
    pub time: String,
    pub location: String,
}

impl From<&Event> for EventPreview {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            image_url: event.image_url.clone(),
            category: event.category,
            date: event.date,
            time: event.time.clone(),
            location: event.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    #[serde(flatten)]
    pub post: Post,
    pub event: Option<EventPreview>,
}
