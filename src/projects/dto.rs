use serde::{Deserialize, Serialize};

use crate::projects::repo_types::{NewProject, ProjectUpdate};

/// Project creation body. The owner is always the authenticated requester;
/// any `owner_id` a client sends is dropped during deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub featured: bool,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            image: req.image,
            technologies: req.technologies,
            live_url: req.live_url,
            source_url: req.source_url,
            featured: req.featured,
        }
    }
}

/// Partial project update; owner is not representable here.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub featured: Option<bool>,
}

impl From<UpdateProjectRequest> for ProjectUpdate {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            image: req.image,
            technologies: req.technologies,
            live_url: req.live_url,
            source_url: req.source_url,
            featured: req.featured,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}
