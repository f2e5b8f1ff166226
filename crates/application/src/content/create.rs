use infrastructure::store::Store;
use tracing::{info, instrument};
use uuid::Uuid;
use vybe_core::entities::content::{Content, ContentKind, MediaType};
use vybe_core::entities::users::UserSetField;

use super::dtos::ContentView;
use super::projection::project_content;
use crate::{AppError, AppResult};

pub struct CreateContentUseCase;

impl CreateContentUseCase {
    /// Creates a post or loop. Stories go through `UploadStoryUseCase`,
    /// which has replace semantics. `media_url` is what the upload
    /// collaborator returned; its absence means no file was uploaded.
    /// The author's back-reference is appended after the insert so a
    /// failure between the two steps is visible, never silently skipped.
    #[instrument(skip(store, media_url, caption), fields(author = %author_id, kind = ?kind))]
    pub async fn execute(
        store: &Store,
        author_id: Uuid,
        kind: ContentKind,
        media_url: Option<String>,
        caption: Option<String>,
        media_type: Option<&str>,
    ) -> AppResult<ContentView> {
        // Resolved before any write so a misrouted story never leaves an
        // orphaned document behind.
        let list_field = match kind {
            ContentKind::Post => UserSetField::Posts,
            ContentKind::Loop => UserSetField::Loops,
            ContentKind::Story => {
                return Err(AppError::Internal(
                    "stories are created via UploadStoryUseCase".to_string(),
                ))
            }
        };

        let media_type = match kind {
            // Loops are always vertical video; the field is not client-supplied.
            ContentKind::Loop => MediaType::Video,
            ContentKind::Post | ContentKind::Story => parse_media_type(media_type)?,
        };

        let media = media_url.ok_or_else(|| {
            AppError::Validation("Please upload an image or video.".to_string())
        })?;

        let caption = normalize_caption(caption);

        let content = store
            .contents
            .insert(Content::new(kind, author_id, media, media_type, caption))
            .await?;

        store
            .users
            .add_to_set(author_id, list_field, content.id)
            .await?;

        info!(content_id = %content.id, "content created");
        project_content(store, &content).await
    }
}

pub(crate) fn parse_media_type(value: Option<&str>) -> AppResult<MediaType> {
    value
        .and_then(MediaType::parse)
        .ok_or_else(|| AppError::Validation("Media type must be 'image' or 'video'.".to_string()))
}

pub(crate) fn normalize_caption(caption: Option<String>) -> Option<String> {
    caption
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}
