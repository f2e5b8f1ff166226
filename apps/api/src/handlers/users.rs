use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use application::users::{
    dtos::EditProfileRequest,
    edit_profile::EditProfileUseCase,
    list_following::ListFollowingUseCase,
    profile::{CurrentUserUseCase, GetProfileUseCase, GetUserByIdUseCase},
    search::SearchUsersUseCase,
    suggested::SuggestedUsersUseCase,
    toggle_follow::ToggleFollowUseCase,
};
use application::AppError;
use infrastructure::media::MediaStorage;
use infrastructure::store::Store;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpApiError;
use crate::handlers::store_upload;
use crate::multipart;

#[derive(Deserialize)]
pub struct SearchQuery {
    keyword: String,
}

#[get("/api/user/current")]
pub async fn current_user(
    user: AuthUser,
    store: web::Data<Store>,
) -> Result<impl Responder, HttpApiError> {
    let view = CurrentUserUseCase::execute(&store, *user).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "user": view })))
}

#[get("/api/user/get/{userId}")]
pub async fn get_user_by_id(
    _user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let user_id: Uuid = path
        .parse()
        .map_err(|_| AppError::Validation("Invalid user ID.".to_string()))?;
    let view = GetUserByIdUseCase::execute(&store, user_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "user": view })))
}

#[get("/api/user/suggested")]
pub async fn suggested_users(
    user: AuthUser,
    store: web::Data<Store>,
) -> Result<impl Responder, HttpApiError> {
    let users = SuggestedUsersUseCase::execute(&store, *user).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "users": users })))
}

#[get("/api/user/search")]
pub async fn search(
    _user: AuthUser,
    store: web::Data<Store>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, HttpApiError> {
    let users = SearchUsersUseCase::execute(&store, &query.keyword).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "users": users })))
}

#[get("/api/user/getProfile/{userName}")]
pub async fn get_profile(
    _user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let profile = GetProfileUseCase::execute(&store, &path).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "user": profile })))
}

#[get("/api/user/follow/{targetUserId}")]
pub async fn toggle_follow(
    user: AuthUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<impl Responder, HttpApiError> {
    let target_id: Uuid = path
        .parse()
        .map_err(|_| AppError::Validation("Invalid target user ID".to_string()))?;
    let change = ToggleFollowUseCase::execute(&store, *user, target_id).await?;

    let message = if change.following {
        "Followed successfully"
    } else {
        "Unfollowed successfully"
    };
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "following": change.following,
        "message": message,
    })))
}

#[get("/api/user/getFollowing")]
pub async fn get_following(
    user: AuthUser,
    store: web::Data<Store>,
) -> Result<impl Responder, HttpApiError> {
    let following = ListFollowingUseCase::execute(&store, *user).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "following": following })))
}

#[post("/api/user/editProfile")]
pub async fn edit_profile(
    user: AuthUser,
    store: web::Data<Store>,
    media: web::Data<dyn MediaStorage>,
    payload: Multipart,
) -> Result<impl Responder, HttpApiError> {
    let form = multipart::parse(payload).await?;

    let req = EditProfileRequest {
        name: form.text("name").unwrap_or_default(),
        user_name: form.text("userName").unwrap_or_default(),
        bio: form.text("bio"),
        profession: form.text("profession"),
        gender: form.text("gender"),
    };

    let new_profile_image = store_upload(media.get_ref(), form.file).await?;
    let view = EditProfileUseCase::execute(&store, *user, req, new_profile_image).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "user": view })))
}
