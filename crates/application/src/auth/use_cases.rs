use crate::auth::dtos::*;
use crate::auth::session;
use crate::users::dtos::UserView;
use crate::{AppError, AppResult};
use tracing::{info, instrument, warn};
use validator::Validate;

#[cfg(test)]
#[path = "use_cases_test.rs"]
mod tests;

use chrono::{Duration, Utc};
use infrastructure::crypto::password::{hash_password, verify_password};
use infrastructure::mail::Mailer;
use infrastructure::store::Store;
use rand::Rng;
use vybe_core::entities::users::User;

// ============ Config ============

pub struct AuthConfig {
    pub jwt_secret: String,
}

// ============ Constants ============

const OTP_EXPIRY_MINUTES: i64 = 5;

// ============ Sign Up Use Case ============

pub struct SignUpUseCase;

impl SignUpUseCase {
    #[instrument(skip(store, config, req), fields(user_name = %req.user_name))]
    pub async fn execute(
        store: &Store,
        config: &AuthConfig,
        req: SignUpRequest,
    ) -> AppResult<(UserView, String)> {
        req.validate()?;

        if !crate::auth::USERNAME_REGEX.is_match(&req.user_name) {
            return Err(AppError::Validation(
                "Username can only contain letters, numbers, dots, underscores, and hyphens."
                    .to_string(),
            ));
        }

        if store.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::Conflict(
                "This email is already registered. Please use a different email.".to_string(),
            ));
        }

        if store.users.find_by_username(&req.user_name).await?.is_some() {
            return Err(AppError::Conflict(
                "This username is already taken. Please choose a different username.".to_string(),
            ));
        }

        let password_hash =
            hash_password(&req.password).map_err(|e| AppError::Internal(e.to_string()))?;

        let user = store
            .users
            .insert(User::new(req.name, req.user_name, req.email, password_hash))
            .await?;

        let token = session::issue_token(&config.jwt_secret, user.id)?;
        info!(user_id = %user.id, "account created");

        Ok((UserView::from(user), token))
    }
}

// ============ Sign In Use Case ============

pub struct SignInUseCase;

impl SignInUseCase {
    #[instrument(skip(store, config, req), fields(user_name = %req.user_name))]
    pub async fn execute(
        store: &Store,
        config: &AuthConfig,
        req: SignInRequest,
    ) -> AppResult<(UserView, String)> {
        req.validate()?;

        let user = store
            .users
            .find_by_username(&req.user_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "No account found with this username. Please check and try again.".to_string(),
                )
            })?;

        let matches = verify_password(&req.password, &user.password_hash)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        if !matches {
            warn!(user_id = %user.id, "sign-in with incorrect password");
            return Err(AppError::Authentication(
                "Incorrect password. Please try again.".to_string(),
            ));
        }

        let token = session::issue_token(&config.jwt_secret, user.id)?;

        Ok((UserView::from(user), token))
    }
}

// ============ Send OTP Use Case ============

pub struct SendOtpUseCase;

impl SendOtpUseCase {
    /// Generates and dispatches a password-reset code. A pending unexpired
    /// code puts the request in cooldown without touching the stored code.
    /// The cooldown check and the write both run against the one document
    /// read at the top; concurrent requests resolve last-write-wins.
    #[instrument(skip(store, mailer, req), fields(email = %req.email))]
    pub async fn execute(store: &Store, mailer: &dyn Mailer, req: SendOtpRequest) -> AppResult<()> {
        req.validate()?;

        let mut user = store.users.find_by_email(&req.email).await?.ok_or_else(|| {
            AppError::NotFound(
                "No account found with this email. Please check and try again.".to_string(),
            )
        })?;

        if user.reset_otp.is_some() {
            if let Some(expires_at) = user.otp_expires_at {
                let remaining = (expires_at - Utc::now()).num_seconds();
                if remaining > 0 {
                    return Err(AppError::Cooldown {
                        remaining_secs: remaining as u64,
                    });
                }
            }
        }

        let otp = rand::thread_rng().gen_range(100_000..=999_999).to_string();

        user.reset_otp = Some(otp.clone());
        user.otp_expires_at = Some(Utc::now() + Duration::minutes(OTP_EXPIRY_MINUTES));
        user.is_otp_verified = false;
        let user = store.users.update(user).await?;

        mailer
            .send_otp(&user.email, &otp)
            .await
            .map_err(|e| AppError::Internal(format!("failed to dispatch OTP mail: {}", e)))?;

        info!(user_id = %user.id, "password-reset OTP issued");
        Ok(())
    }
}

// ============ Verify OTP Use Case ============

pub struct VerifyOtpUseCase;

impl VerifyOtpUseCase {
    /// On success the code is cleared so it cannot replay; the verified
    /// flag stays set for the follow-up password reset.
    #[instrument(skip(store, req), fields(email = %req.email))]
    pub async fn execute(store: &Store, req: VerifyOtpRequest) -> AppResult<()> {
        req.validate()?;

        let mut user = store.users.find_by_email(&req.email).await?.ok_or_else(|| {
            AppError::NotFound(
                "No account found with this email. Please check and try again.".to_string(),
            )
        })?;

        if user.reset_otp.as_deref() != Some(req.otp.as_str()) {
            warn!(user_id = %user.id, "OTP mismatch");
            return Err(AppError::Validation(
                "Invalid OTP. Please enter the correct OTP.".to_string(),
            ));
        }

        match user.otp_expires_at {
            Some(expires_at) if expires_at >= Utc::now() => {}
            _ => {
                return Err(AppError::State(
                    "The OTP has expired. Please request a new one.".to_string(),
                ));
            }
        }

        user.is_otp_verified = true;
        user.reset_otp = None;
        user.otp_expires_at = None;
        store.users.update(user).await?;

        Ok(())
    }
}

// ============ Reset Password Use Case ============

pub struct ResetPasswordUseCase;

impl ResetPasswordUseCase {
    /// Single-use: all OTP state is cleared so another reset needs a fresh
    /// code.
    #[instrument(skip(store, req), fields(email = %req.email))]
    pub async fn execute(store: &Store, req: ResetPasswordRequest) -> AppResult<()> {
        req.validate()?;

        let mut user = store.users.find_by_email(&req.email).await?.ok_or_else(|| {
            AppError::NotFound(
                "No account found with this email. Please check and try again.".to_string(),
            )
        })?;

        if !user.is_otp_verified {
            return Err(AppError::State(
                "Please verify the OTP before resetting your password.".to_string(),
            ));
        }

        user.password_hash =
            hash_password(&req.password).map_err(|e| AppError::Internal(e.to_string()))?;
        user.reset_otp = None;
        user.otp_expires_at = None;
        user.is_otp_verified = false;
        store.users.update(user).await?;

        info!(email = %req.email, "password reset completed");
        Ok(())
    }
}
