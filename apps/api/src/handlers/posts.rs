use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use application::content::{
    create::CreateContentUseCase,
    feed::GlobalFeedUseCase,
    interactions::{AddCommentUseCase, ToggleLikeUseCase, ToggleSaveUseCase},
};
use application::AppError;
use infrastructure::media::MediaStorage;
use infrastructure::store::Store;
use vybe_core::entities::content::ContentKind;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpApiError;
use crate::handlers::store_upload;
use crate::multipart;

#[derive(Deserialize)]
pub struct CommentBody {
    message: String,
}

fn parse_post_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation("Invalid post ID.".to_string()))
}

#[post("/api/post/upload")]
pub async fn upload_post(
    user: AuthUser,
    store: web::Data<Store>,
    media: web::Data<dyn MediaStorage>,
    payload: Multipart,
) -> Result<impl Responder, HttpApiError> {
    let form = multipart::parse(payload).await?;
    let media_type = form.text("mediaType");
    let caption = form.text("caption");
    let media_url = store_upload(media.get_ref(), form.file).await?;

    let post = CreateContentUseCase::execute(
        &store,
        *user,
        ContentKind::Post,
        media_url,
        caption,
        media_type.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Post created successfully.",
        "data": post,
    })))
}

#[get("/api/post/getAll")]
pub async fn get_all_posts(
    _user: AuthUser,
    store: web::Data<Store>,
) -> Result<impl Responder, HttpApiError> {
    let posts = GlobalFeedUseCase::execute(&store, ContentKind::Post).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Posts fetched successfully.",
        "data": posts,
    })))
}

#[get("/api/post/like/{postId}")]
pub async fn toggle_like_post(
    user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let post_id = parse_post_id(&path)?;
    let (post, liked) = ToggleLikeUseCase::execute(&store, ContentKind::Post, post_id, *user).await?;

    let message = if liked {
        "Post liked successfully."
    } else {
        "Post unliked successfully."
    };
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": message,
        "data": post,
    })))
}

#[post("/api/post/comment/{postId}")]
pub async fn add_comment_to_post(
    user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<CommentBody>,
) -> Result<impl Responder, HttpApiError> {
    let post_id = parse_post_id(&path)?;
    let post =
        AddCommentUseCase::execute(&store, ContentKind::Post, post_id, *user, &body.message)
            .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comment added successfully.",
        "data": post,
    })))
}

#[get("/api/post/saved/{postId}")]
pub async fn toggle_save_post(
    user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let post_id = parse_post_id(&path)?;
    let (view, saved) = ToggleSaveUseCase::execute(&store, post_id, *user).await?;

    let message = if saved {
        "Post saved successfully."
    } else {
        "Post removed from saved list."
    };
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": message,
        "data": view,
    })))
}
