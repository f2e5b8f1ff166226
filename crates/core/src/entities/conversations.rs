use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One conversation per unordered participant pair. `messages` is
/// append-only and chronological.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub participants: [Uuid; 2],
    pub messages: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(a: Uuid, b: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            participants: [a, b],
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn involves(&self, user_id: Uuid) -> bool {
        self.participants.contains(&user_id)
    }

    /// Order-insensitive pair match. A user messaging themselves matches
    /// only the conversation where both slots hold that user.
    pub fn is_between(&self, a: Uuid, b: Uuid) -> bool {
        if a == b {
            return self.participants == [a, a];
        }
        self.involves(a) && self.involves(b)
    }

    pub fn other_participant(&self, user_id: Uuid) -> Option<Uuid> {
        self.participants.iter().copied().find(|p| *p != user_id)
    }
}
