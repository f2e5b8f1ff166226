use infrastructure::store::Store;
use tracing::instrument;
use uuid::Uuid;
use vybe_core::entities::content::Content;

use super::dtos::{AuthorSummary, ProfileView, UserView};
use crate::content::projection::project_many;
use crate::{AppError, AppResult};

pub struct CurrentUserUseCase;

impl CurrentUserUseCase {
    pub async fn execute(store: &Store, user_id: Uuid) -> AppResult<UserView> {
        let user = store.users.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::NotFound("No account found for the given user ID.".to_string())
        })?;
        Ok(UserView::from(user))
    }
}

pub struct GetUserByIdUseCase;

impl GetUserByIdUseCase {
    pub async fn execute(store: &Store, user_id: Uuid) -> AppResult<UserView> {
        let user = store
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;
        Ok(UserView::from(user))
    }
}

pub struct GetProfileUseCase;

impl GetProfileUseCase {
    /// Profile read view: resolves the unique username, then joins the
    /// user's content lists and graph neighbours into projected views.
    #[instrument(skip(store))]
    pub async fn execute(store: &Store, user_name: &str) -> AppResult<ProfileView> {
        let user = store
            .users
            .find_by_username(user_name)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        let posts = Self::load_contents(store, &user.posts).await?;
        let loops = Self::load_contents(store, &user.loops).await?;
        let followers = Self::load_summaries(store, &user.followers).await?;
        let following = Self::load_summaries(store, &user.following).await?;

        Ok(ProfileView {
            id: user.id,
            user_name: user.user_name,
            name: user.name,
            bio: user.bio,
            profession: user.profession,
            gender: user.gender,
            profile_image: user.profile_image,
            posts: project_many(store, posts).await?,
            loops: project_many(store, loops).await?,
            followers,
            following,
            story: user.story,
            created_at: user.created_at,
        })
    }

    async fn load_contents(
        store: &Store,
        ids: &std::collections::HashSet<Uuid>,
    ) -> AppResult<Vec<Content>> {
        let mut contents = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(content) = store.contents.find_by_id(*id).await? {
                contents.push(content);
            }
        }
        contents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contents)
    }

    async fn load_summaries(
        store: &Store,
        ids: &std::collections::HashSet<Uuid>,
    ) -> AppResult<Vec<AuthorSummary>> {
        let mut summaries = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(user) = store.users.find_by_id(*id).await? {
                summaries.push(AuthorSummary::from(&user));
            }
        }
        Ok(summaries)
    }
}
