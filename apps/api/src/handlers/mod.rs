pub mod auth;
pub mod error_handler;
pub mod health;
pub mod loops;
pub mod messages;
pub mod posts;
pub mod stories;
pub mod users;

use application::{AppError, AppResult};
use infrastructure::media::MediaStorage;

use crate::multipart::UploadedFile;

/// Hands the buffered file part to the media storage collaborator and
/// returns the public URL. No file means no URL.
pub(crate) async fn store_upload(
    media: &dyn MediaStorage,
    file: Option<UploadedFile>,
) -> AppResult<Option<String>> {
    match file {
        Some(file) => {
            let url = media
                .upload(&file.file_name, file.bytes)
                .await
                .map_err(|e| AppError::Internal(format!("media upload failed: {}", e)))?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}
