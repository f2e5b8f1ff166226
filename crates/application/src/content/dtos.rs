use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use vybe_core::entities::content::{ContentKind, MediaType};

use crate::users::dtos::AuthorSummary;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub author: Option<AuthorSummary>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Content entity with every referenced identity projected to the public
/// subset. `author` is `None` only if the author document has vanished.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentView {
    pub id: Uuid,
    pub kind: ContentKind,
    pub author: Option<AuthorSummary>,
    pub media: String,
    pub media_type: MediaType,
    pub caption: Option<String>,
    pub likes: Vec<Uuid>,
    pub comments: Vec<CommentView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub viewers: Vec<AuthorSummary>,
    pub created_at: DateTime<Utc>,
}
