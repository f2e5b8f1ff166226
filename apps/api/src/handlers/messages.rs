use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use application::messages::{
    list_messages::ListMessagesUseCase, prev_chats::PrevChatsUseCase,
    send_message::SendMessageUseCase,
};
use application::AppError;
use infrastructure::media::MediaStorage;
use infrastructure::store::Store;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpApiError;
use crate::handlers::store_upload;
use crate::multipart;

fn parse_receiver_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation("Invalid sender or receiver ID".to_string()))
}

#[post("/api/message/send/{receiverId}")]
pub async fn send_message(
    user: AuthUser,
    store: web::Data<Store>,
    media: web::Data<dyn MediaStorage>,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<impl Responder, HttpApiError> {
    let receiver_id = parse_receiver_id(&path)?;

    let form = multipart::parse(payload).await?;
    let text = form.text("message");
    let image_url = store_upload(media.get_ref(), form.file).await?;

    let message = SendMessageUseCase::execute(&store, *user, receiver_id, text, image_url).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "newMessage": message })))
}

#[get("/api/message/getAll/{receiverId}")]
pub async fn get_all_messages(
    user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let receiver_id = parse_receiver_id(&path)?;
    let messages = ListMessagesUseCase::execute(&store, *user, receiver_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "messages": messages })))
}

#[get("/api/message/prevChats")]
pub async fn prev_chats(
    user: AuthUser,
    store: web::Data<Store>,
) -> Result<impl Responder, HttpApiError> {
    let previous_users = PrevChatsUseCase::execute(&store, *user).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "previousUsers": previous_users })))
}
