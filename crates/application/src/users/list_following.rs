use infrastructure::store::Store;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{AppError, AppResult};

pub struct ListFollowingUseCase;

impl ListFollowingUseCase {
    pub async fn execute(store: &Store, user_id: Uuid) -> AppResult<HashSet<Uuid>> {
        let user = store
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.following)
    }
}
