use infrastructure::store::Store;
use tracing::instrument;
use uuid::Uuid;
use vybe_core::entities::users::UserSetField;

use super::dtos::FollowChange;
use crate::{AppError, AppResult};

pub struct ToggleFollowUseCase;

impl ToggleFollowUseCase {
    /// Strict toggle over the symmetric follower/following relation. Both
    /// halves are updated concurrently; if one side fails the request
    /// errors. No rollback is attempted, so a failure can leave the
    /// relation one-sided until the next toggle.
    #[instrument(skip(store))]
    pub async fn execute(store: &Store, actor_id: Uuid, target_id: Uuid) -> AppResult<FollowChange> {
        if actor_id == target_id {
            return Err(AppError::Conflict("Cannot follow yourself".to_string()));
        }

        let (actor, target) = tokio::join!(
            store.users.find_by_id(actor_id),
            store.users.find_by_id(target_id)
        );
        let actor = actor?.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        if target?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let is_following = actor.following.contains(&target_id);

        if is_following {
            tokio::try_join!(
                store
                    .users
                    .remove_from_set(actor_id, UserSetField::Following, target_id),
                store
                    .users
                    .remove_from_set(target_id, UserSetField::Followers, actor_id),
            )?;
        } else {
            tokio::try_join!(
                store
                    .users
                    .add_to_set(actor_id, UserSetField::Following, target_id),
                store
                    .users
                    .add_to_set(target_id, UserSetField::Followers, actor_id),
            )?;
        }

        Ok(FollowChange {
            following: !is_following,
        })
    }
}
