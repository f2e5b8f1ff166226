use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppError, AppResult};

/// Sessions are effectively "log in once": the token is valid for ten years
/// and only the cookie carrying it ever expires it client-side.
pub const SESSION_LIFETIME_DAYS: i64 = 10 * 365;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Mint a signed session token bound to `user_id`.
pub fn issue_token(jwt_secret: &str, user_id: Uuid) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::days(SESSION_LIFETIME_DAYS)).timestamp(),
    };

    let encoding_key = EncodingKey::from_secret(jwt_secret.as_bytes());
    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("JWT encoding error: {}", e)))
}

/// Verify a session token and return the embedded user identity. Any
/// signature, format, or expiry problem collapses to one auth failure.
pub fn verify_token(jwt_secret: &str, token: &str) -> AppResult<Uuid> {
    let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
    let data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|_| AppError::Authentication("Invalid or expired token".to_string()))?;

    data.claims
        .sub
        .parse()
        .map_err(|_| AppError::Authentication("Invalid or expired token".to_string()))
}
