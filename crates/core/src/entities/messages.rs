use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direct message. At least one of `message`/`image` is present;
/// the use case enforces this before insertion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender: Uuid,
    pub receiver: Uuid,
    pub message: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Uuid, receiver: Uuid, message: Option<String>, image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            receiver,
            message,
            image,
            created_at: Utc::now(),
        }
    }
}
