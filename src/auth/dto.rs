use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::repo_types::{SocialLinks, User};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public subset of an identity returned alongside a fresh token.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub title: String,
    pub avatar: String,
    pub social_links: SocialLinks,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            title: user.title.clone(),
            avatar: user.avatar.clone(),
            social_links: user.social_links.0.clone(),
        }
    }
}
