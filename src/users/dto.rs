use serde::{Deserialize, Serialize};

use crate::users::repo_types::{
    Certification, EducationEntry, ExperienceEntry, ProfileUpdate, SkillEntry, SocialLinks,
};

/// Partial profile update. There is deliberately no password field here;
/// credentials are not updatable through profile routes, and any extra keys
/// a client sends are dropped during deserialization.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub social_links: Option<SocialLinks>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            bio: req.bio,
            title: req.title,
            location: req.location,
            avatar: req.avatar,
            social_links: req.social_links,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CertificationsRequest {
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Deserialize)]
pub struct EducationRequest {
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceRequest {
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}
