use chrono::Utc;
use infrastructure::store::Store;
use tracing::instrument;
use uuid::Uuid;
use vybe_core::entities::content::{Comment, Content, ContentKind, ContentSetField};

use super::dtos::ContentView;
use super::projection::project_content;
use crate::users::dtos::UserView;
use crate::{AppError, AppResult};

async fn find_of_kind(store: &Store, kind: ContentKind, content_id: Uuid) -> AppResult<Content> {
    store
        .contents
        .find_by_id(content_id)
        .await?
        .filter(|c| c.kind == kind)
        .ok_or_else(|| AppError::NotFound(format!("{} not found.", kind.label())))
}

pub struct ToggleLikeUseCase;

impl ToggleLikeUseCase {
    /// Strict toggle: presence of the actor in `likes` flips. Returns the
    /// updated projected entity and whether the actor now likes it.
    #[instrument(skip(store), fields(kind = ?kind))]
    pub async fn execute(
        store: &Store,
        kind: ContentKind,
        content_id: Uuid,
        actor_id: Uuid,
    ) -> AppResult<(ContentView, bool)> {
        let content = find_of_kind(store, kind, content_id).await?;

        let already_liked = content.likes.contains(&actor_id);
        if already_liked {
            store
                .contents
                .remove_from_set(content_id, ContentSetField::Likes, actor_id)
                .await?;
        } else {
            store
                .contents
                .add_to_set(content_id, ContentSetField::Likes, actor_id)
                .await?;
        }

        let updated = find_of_kind(store, kind, content_id).await?;
        Ok((project_content(store, &updated).await?, !already_liked))
    }
}

pub struct AddCommentUseCase;

impl AddCommentUseCase {
    /// Appends to the ordered comment list; insertion order is display
    /// order.
    #[instrument(skip(store, message), fields(kind = ?kind))]
    pub async fn execute(
        store: &Store,
        kind: ContentKind,
        content_id: Uuid,
        actor_id: Uuid,
        message: &str,
    ) -> AppResult<ContentView> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::Validation("Comment cannot be empty.".to_string()));
        }

        find_of_kind(store, kind, content_id).await?;

        store
            .contents
            .push_comment(
                content_id,
                Comment {
                    author: actor_id,
                    message: message.to_string(),
                    created_at: Utc::now(),
                },
            )
            .await?;

        let updated = find_of_kind(store, kind, content_id).await?;
        project_content(store, &updated).await
    }
}

pub struct ToggleSaveUseCase;

impl ToggleSaveUseCase {
    /// Save state lives on the actor, not the content: the toggle flips
    /// the post id inside the actor's `saved` set.
    #[instrument(skip(store))]
    pub async fn execute(
        store: &Store,
        post_id: Uuid,
        actor_id: Uuid,
    ) -> AppResult<(UserView, bool)> {
        let user = store
            .users
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        let already_saved = user.saved.contains(&post_id);
        if already_saved {
            store
                .users
                .remove_from_set(actor_id, vybe_core::entities::users::UserSetField::Saved, post_id)
                .await?;
        } else {
            store
                .users
                .add_to_set(actor_id, vybe_core::entities::users::UserSetField::Saved, post_id)
                .await?;
        }

        let updated = store
            .users
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;
        Ok((UserView::from(updated), !already_saved))
    }
}
