use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;
use validator::Validate;
use vybe_core::entities::users::{Gender, User};

use crate::content::dtos::ContentView;

/// Public identity subset projected wherever an author or follower shows
/// up. Never carries credentials.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub user_name: String,
    pub profile_image: Option<String>,
}

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            user_name: user.user_name.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}

/// Password-stripped user document as returned to its owner.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub profession: Option<String>,
    pub gender: Option<Gender>,
    pub profile_image: Option<String>,
    pub followers: HashSet<Uuid>,
    pub following: HashSet<Uuid>,
    pub saved: HashSet<Uuid>,
    pub posts: HashSet<Uuid>,
    pub loops: HashSet<Uuid>,
    pub story: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            name: user.name,
            bio: user.bio,
            profession: user.profession,
            gender: user.gender,
            profile_image: user.profile_image,
            followers: user.followers,
            following: user.following,
            saved: user.saved,
            posts: user.posts,
            loops: user.loops,
            story: user.story,
            created_at: user.created_at,
        }
    }
}

/// Profile read view: content lists and graph neighbours joined in.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: Uuid,
    pub user_name: String,
    pub name: String,
    pub bio: Option<String>,
    pub profession: Option<String>,
    pub gender: Option<Gender>,
    pub profile_image: Option<String>,
    pub posts: Vec<ContentView>,
    pub loops: Vec<ContentView>,
    pub followers: Vec<AuthorSummary>,
    pub following: Vec<AuthorSummary>,
    pub story: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditProfileRequest {
    #[validate(length(min = 3, message = "Name should contain at least 3 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Username can't be empty"))]
    pub user_name: String,
    pub bio: Option<String>,
    pub profession: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FollowChange {
    pub following: bool,
}
