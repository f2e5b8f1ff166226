use infrastructure::store::Store;
use std::collections::HashSet;
use uuid::Uuid;

use crate::users::dtos::UserView;
use crate::AppResult;

pub struct PrevChatsUseCase;

impl PrevChatsUseCase {
    /// Distinct prior conversation partners, most recent conversation
    /// first.
    pub async fn execute(store: &Store, user_id: Uuid) -> AppResult<Vec<UserView>> {
        let conversations = store.conversations.find_for_user(user_id).await?;

        let mut seen: HashSet<Uuid> = HashSet::new();
        let mut partners = Vec::new();
        for conversation in conversations {
            let Some(other) = conversation.other_participant(user_id) else {
                continue;
            };
            if !seen.insert(other) {
                continue;
            }
            if let Some(user) = store.users.find_by_id(other).await? {
                partners.push(UserView::from(user));
            }
        }

        Ok(partners)
    }
}
