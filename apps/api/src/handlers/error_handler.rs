use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use application::AppError;
use std::fmt;

/// Wrapper around AppError to implement ResponseError (which is defined in
/// actix-web). Every application failure is rendered as an HTTP 200 with a
/// `success: false` body; clients branch on the flag, not the status code.
#[derive(Debug)]
pub struct HttpApiError(pub AppError);

impl fmt::Display for HttpApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AppError> for HttpApiError {
    fn from(err: AppError) -> Self {
        HttpApiError(err)
    }
}

impl ResponseError for HttpApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        failure(&self.0)
    }
}

/// Render an AppError as the standard failure body. Store and internal
/// failures are logged in full here and reported generically.
pub fn failure(err: &AppError) -> HttpResponse {
    if err.is_unexpected() {
        tracing::error!("unexpected failure: {:?}", err);
    }

    HttpResponse::Ok().json(serde_json::json!({
        "success": false,
        "message": err.public_message(),
    }))
}
