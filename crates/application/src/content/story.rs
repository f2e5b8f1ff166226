use infrastructure::store::Store;
use tracing::{info, instrument};
use uuid::Uuid;
use vybe_core::entities::content::{Content, ContentKind, ContentSetField};

use super::create::{normalize_caption, parse_media_type};
use super::dtos::ContentView;
use super::projection::{project_content, project_many};
use crate::{AppError, AppResult};

pub struct UploadStoryUseCase;

impl UploadStoryUseCase {
    /// Replace semantics: at most one live story per author. The old story
    /// is deleted and the author's reference cleared before the new one is
    /// created, so no stale reference is ever readable.
    #[instrument(skip(store, media_url, caption), fields(author = %author_id))]
    pub async fn execute(
        store: &Store,
        author_id: Uuid,
        media_url: Option<String>,
        caption: Option<String>,
        media_type: Option<&str>,
    ) -> AppResult<ContentView> {
        let media_type = parse_media_type(media_type)?;
        let media = media_url.ok_or_else(|| {
            AppError::Validation("Please upload an image or video.".to_string())
        })?;

        let user = store
            .users
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        if let Some(old_story) = user.story {
            store.users.set_story(author_id, None).await?;
            store.contents.delete(old_story).await?;
        }

        let story = store
            .contents
            .insert(Content::new(
                ContentKind::Story,
                author_id,
                media,
                media_type,
                normalize_caption(caption),
            ))
            .await?;
        store.users.set_story(author_id, Some(story.id)).await?;

        info!(story_id = %story.id, "story uploaded");
        project_content(store, &story).await
    }
}

pub struct ViewStoryUseCase;

impl ViewStoryUseCase {
    /// Idempotent set-insertion: a view cannot be un-viewed.
    #[instrument(skip(store))]
    pub async fn execute(store: &Store, story_id: Uuid, viewer_id: Uuid) -> AppResult<ContentView> {
        let story = store
            .contents
            .find_by_id(story_id)
            .await?
            .filter(|c| c.kind == ContentKind::Story)
            .ok_or_else(|| AppError::NotFound("Story not found.".to_string()))?;

        store
            .contents
            .add_to_set(story.id, ContentSetField::Viewers, viewer_id)
            .await?;

        let updated = store
            .contents
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found.".to_string()))?;
        project_content(store, &updated).await
    }
}

pub struct StoryByUsernameUseCase;

impl StoryByUsernameUseCase {
    /// `None` means the user simply has no live story.
    pub async fn execute(store: &Store, user_name: &str) -> AppResult<Option<ContentView>> {
        let user = store
            .users
            .find_by_username(user_name)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        match store
            .contents
            .find_by_author_and_kind(user.id, ContentKind::Story)
            .await?
        {
            Some(story) => Ok(Some(project_content(store, &story).await?)),
            None => Ok(None),
        }
    }
}

pub struct StoryFeedUseCase;

impl StoryFeedUseCase {
    /// Story ring: live stories of everyone the actor follows,
    /// newest-first.
    #[instrument(skip(store))]
    pub async fn execute(store: &Store, actor_id: Uuid) -> AppResult<Vec<ContentView>> {
        let actor = store
            .users
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        let stories: Vec<Content> = store
            .contents
            .list_by_kind(ContentKind::Story)
            .await?
            .into_iter()
            .filter(|s| actor.following.contains(&s.author))
            .collect();

        project_many(store, stories).await
    }
}
