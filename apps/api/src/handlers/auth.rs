use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use application::auth::{
    dtos::{ResetPasswordRequest, SendOtpRequest, SignInRequest, SignUpRequest, VerifyOtpRequest},
    session::SESSION_LIFETIME_DAYS,
    use_cases::{
        AuthConfig, ResetPasswordUseCase, SendOtpUseCase, SignInUseCase, SignUpUseCase,
        VerifyOtpUseCase,
    },
};
use infrastructure::mail::Mailer;
use infrastructure::store::Store;

use crate::config::Config;
use crate::handlers::error_handler::HttpApiError;

/// HTTP-only session cookie carrying the signed token. SameSite=None so the
/// browser sends it from the separately hosted frontend.
fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build("token", token)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::None)
        .max_age(Duration::days(SESSION_LIFETIME_DAYS))
        .finish()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build("token", "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish()
}

#[post("/api/auth/signup")]
pub async fn signup(
    store: web::Data<Store>,
    config: web::Data<Config>,
    body: web::Json<SignUpRequest>,
) -> Result<impl Responder, HttpApiError> {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
    };
    let (user, token) = SignUpUseCase::execute(&store, &auth_config, body.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token, config.cookie_secure))
        .json(json!({
            "success": true,
            "user": user,
            "message": "Account created successfully! You are now logged in.",
        })))
}

#[post("/api/auth/signin")]
pub async fn signin(
    store: web::Data<Store>,
    config: web::Data<Config>,
    body: web::Json<SignInRequest>,
) -> Result<impl Responder, HttpApiError> {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
    };
    let (user, token) = SignInUseCase::execute(&store, &auth_config, body.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token, config.cookie_secure))
        .json(json!({
            "success": true,
            "user": user,
            "message": "Login successful! Welcome back.",
        })))
}

#[get("/api/auth/signout")]
pub async fn signout() -> impl Responder {
    HttpResponse::Ok()
        .cookie(clear_session_cookie())
        .json(json!({
            "success": true,
            "message": "You have been logged out successfully.",
        }))
}

#[post("/api/auth/sendOtp")]
pub async fn send_otp(
    store: web::Data<Store>,
    mailer: web::Data<dyn Mailer>,
    body: web::Json<SendOtpRequest>,
) -> Result<impl Responder, HttpApiError> {
    SendOtpUseCase::execute(&store, mailer.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "OTP sent to your email. Please check your inbox (and spam folder).",
    })))
}

#[post("/api/auth/verifyOtp")]
pub async fn verify_otp(
    store: web::Data<Store>,
    body: web::Json<VerifyOtpRequest>,
) -> Result<impl Responder, HttpApiError> {
    VerifyOtpUseCase::execute(&store, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "OTP verified successfully. You can now reset your password.",
    })))
}

#[post("/api/auth/resetPassword")]
pub async fn reset_password(
    store: web::Data<Store>,
    body: web::Json<ResetPasswordRequest>,
) -> Result<impl Responder, HttpApiError> {
    ResetPasswordUseCase::execute(&store, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Your password has been reset successfully. You can now log in.",
    })))
}
