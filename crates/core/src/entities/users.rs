use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// User document. `followers`/`following` are the two halves of one
/// symmetric relation; a user id never appears in its own `following`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
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
    // Password-reset OTP state
    pub reset_otp: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub is_otp_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, user_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name,
            email,
            password_hash,
            name,
            bio: None,
            profession: None,
            gender: None,
            profile_image: None,
            followers: HashSet::new(),
            following: HashSet::new(),
            saved: HashSet::new(),
            posts: HashSet::new(),
            loops: HashSet::new(),
            story: None,
            reset_otp: None,
            otp_expires_at: None,
            is_otp_verified: false,
            created_at: Utc::now(),
        }
    }
}

/// Set-valued fields of the user document addressable by the store's
/// set-union/set-difference updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserSetField {
    Followers,
    Following,
    Saved,
    Posts,
    Loops,
}
