use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A portfolio project. `owner_id` is set from the authenticated requester at
/// creation time and is immutable afterwards.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub source_url: String,
    pub featured: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub source_url: String,
    pub featured: bool,
}

/// Partial project update; `None` leaves the column unchanged. There is no
/// owner field here on purpose.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub featured: Option<bool>,
}
