use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Loop,
    Story,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Post => "Post",
            ContentKind::Loop => "Loop",
            ContentKind::Story => "Story",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "image" => Some(MediaType::Image),
            "video" => Some(MediaType::Video),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Content document shared by the three kinds. Posts and loops use
/// `likes`/`comments`; stories use `viewers`. Loops are always video.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: Uuid,
    pub kind: ContentKind,
    pub author: Uuid,
    pub media: String,
    pub media_type: MediaType,
    pub caption: Option<String>,
    pub likes: HashSet<Uuid>,
    pub comments: Vec<Comment>,
    pub viewers: HashSet<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Content {
    pub fn new(
        kind: ContentKind,
        author: Uuid,
        media: String,
        media_type: MediaType,
        caption: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            author,
            media,
            media_type,
            caption,
            likes: HashSet::new(),
            comments: Vec::new(),
            viewers: HashSet::new(),
            created_at: Utc::now(),
        }
    }
}

/// Set-valued fields of the content document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentSetField {
    Likes,
    Viewers,
}
