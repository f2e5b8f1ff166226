use actix_web::{Error, FromRequest, HttpMessage};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::handlers::error_handler::HttpApiError;
use crate::middleware::auth::SessionRejection;
use application::AppError;

/// Identity of the authenticated caller, put into request extensions by the
/// auth middleware. Routes that take this extractor reject requests that
/// arrived without a valid session cookie; a cookie that failed
/// verification reads differently from no cookie at all.
pub struct AuthUser(pub Uuid);

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let extensions = req.extensions();
        if let Some(user_id) = extensions.get::<Uuid>() {
            return ready(Ok(AuthUser(*user_id)));
        }
        let message = if extensions.get::<SessionRejection>().is_some() {
            "Invalid or expired token"
        } else {
            "Token is not found"
        };
        ready(Err(
            HttpApiError(AppError::Authentication(message.to_string())).into()
        ))
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
