use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use application::content::{
    create::CreateContentUseCase,
    feed::GlobalFeedUseCase,
    interactions::{AddCommentUseCase, ToggleLikeUseCase},
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

fn parse_loop_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation("Invalid loop ID.".to_string()))
}

#[post("/api/loop/upload")]
pub async fn upload_loop(
    user: AuthUser,
    store: web::Data<Store>,
    media: web::Data<dyn MediaStorage>,
    payload: Multipart,
) -> Result<impl Responder, HttpApiError> {
    let form = multipart::parse(payload).await?;
    let caption = form.text("caption");
    let media_url = store_upload(media.get_ref(), form.file).await?;

    let created =
        CreateContentUseCase::execute(&store, *user, ContentKind::Loop, media_url, caption, None)
            .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Loop created successfully.",
        "data": created,
    })))
}

#[get("/api/loop/getAll")]
pub async fn get_all_loops(
    _user: AuthUser,
    store: web::Data<Store>,
) -> Result<impl Responder, HttpApiError> {
    let loops = GlobalFeedUseCase::execute(&store, ContentKind::Loop).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Loops fetched successfully.",
        "data": loops,
    })))
}

#[get("/api/loop/like/{loopId}")]
pub async fn toggle_like_loop(
    user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let loop_id = parse_loop_id(&path)?;
    let (updated, liked) =
        ToggleLikeUseCase::execute(&store, ContentKind::Loop, loop_id, *user).await?;

    let message = if liked {
        "Loop liked successfully."
    } else {
        "Loop unliked successfully."
    };
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": message,
        "data": updated,
    })))
}

#[post("/api/loop/comment/{loopId}")]
pub async fn add_comment_to_loop(
    user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<CommentBody>,
) -> Result<impl Responder, HttpApiError> {
    let loop_id = parse_loop_id(&path)?;
    let updated =
        AddCommentUseCase::execute(&store, ContentKind::Loop, loop_id, *user, &body.message)
            .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comment added successfully.",
        "data": updated,
    })))
}
