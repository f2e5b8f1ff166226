use infrastructure::store::Store;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;
use vybe_core::entities::users::Gender;

use super::dtos::{EditProfileRequest, UserView};
use crate::{AppError, AppResult};

pub struct EditProfileUseCase;

impl EditProfileUseCase {
    /// `new_profile_image` is the URL returned by the upload collaborator;
    /// `None` leaves the current image untouched.
    #[instrument(skip(store, req, new_profile_image), fields(user_id = %user_id))]
    pub async fn execute(
        store: &Store,
        user_id: Uuid,
        req: EditProfileRequest,
        new_profile_image: Option<String>,
    ) -> AppResult<UserView> {
        req.validate()?;

        if !crate::auth::USERNAME_REGEX.is_match(&req.user_name) {
            return Err(AppError::Validation(
                "Username can only contain letters, numbers, dots, underscores, and hyphens."
                    .to_string(),
            ));
        }

        let gender = match req.gender.as_deref() {
            None | Some("") => None,
            Some(value) => Some(Gender::parse(value).ok_or_else(|| {
                AppError::Validation("Enter male or female in your gender.".to_string())
            })?),
        };

        let mut user = store.users.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::NotFound("No account found for the given user ID.".to_string())
        })?;

        if let Some(existing) = store.users.find_by_username(&req.user_name).await? {
            if existing.id != user_id {
                return Err(AppError::Conflict("Username already exists.".to_string()));
            }
        }

        if let Some(image_url) = new_profile_image {
            user.profile_image = Some(image_url);
        }

        user.name = req.name;
        user.user_name = req.user_name;
        user.bio = req.bio;
        user.profession = req.profession;
        if gender.is_some() {
            user.gender = gender;
        }

        let user = store.users.update(user).await?;
        Ok(UserView::from(user))
    }
}
