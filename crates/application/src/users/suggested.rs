use infrastructure::store::Store;
use uuid::Uuid;

use super::dtos::UserView;
use crate::AppResult;

pub struct SuggestedUsersUseCase;

impl SuggestedUsersUseCase {
    /// Everyone except the actor, password-stripped and unranked.
    pub async fn execute(store: &Store, actor_id: Uuid) -> AppResult<Vec<UserView>> {
        let users = store.users.list_all().await?;
        Ok(users
            .into_iter()
            .filter(|u| u.id != actor_id)
            .map(UserView::from)
            .collect())
    }
}
