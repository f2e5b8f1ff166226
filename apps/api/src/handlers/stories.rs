use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use application::content::story::{
    StoryByUsernameUseCase, StoryFeedUseCase, UploadStoryUseCase, ViewStoryUseCase,
};
use application::AppError;
use infrastructure::media::MediaStorage;
use infrastructure::store::Store;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpApiError;
use crate::handlers::store_upload;
use crate::multipart;

#[post("/api/story/upload")]
pub async fn upload_story(
    user: AuthUser,
    store: web::Data<Store>,
    media: web::Data<dyn MediaStorage>,
    payload: Multipart,
) -> Result<impl Responder, HttpApiError> {
    let form = multipart::parse(payload).await?;
    let media_type = form.text("mediaType");
    let caption = form.text("caption");
    let media_url = store_upload(media.get_ref(), form.file).await?;

    let story =
        UploadStoryUseCase::execute(&store, *user, media_url, caption, media_type.as_deref())
            .await?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": story })))
}

#[get("/api/story/view/{storyId}")]
pub async fn view_story(
    user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let story_id: Uuid = path
        .parse()
        .map_err(|_| AppError::Validation("Invalid story ID.".to_string()))?;
    let story = ViewStoryUseCase::execute(&store, story_id, *user).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": story })))
}

#[get("/api/story/getByUserName/{userName}")]
pub async fn get_story_by_username(
    _user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let story = StoryByUsernameUseCase::execute(&store, &path).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": story })))
}

#[get("/api/story/getAll")]
pub async fn get_all_stories(
    user: AuthUser,
    store: web::Data<Store>,
) -> Result<impl Responder, HttpApiError> {
    let stories = StoryFeedUseCase::execute(&store, *user).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": stories })))
}
