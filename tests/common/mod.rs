#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use sqlx::types::Json;
use time::OffsetDateTime;
use uuid::Uuid;

use folio::config::{AppConfig, JwtConfig};
use folio::error::StoreError;
use folio::projects::repo::ProjectStore;
use folio::projects::repo_types::{NewProject, Project, ProjectUpdate};
use folio::users::repo::UserStore;
use folio::users::repo_types::{NewUser, ProfileUpdate, SectionUpdate, SocialLinks, User};
use folio::AppState;

/// In-memory identity store. `set_down(true)` makes every call fail with
/// `StoreError::Unavailable`, simulating an unreachable database.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    down: AtomicBool,
}

impl MemoryUserStore {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.down.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new.email) {
            return Err(StoreError::Conflict);
        }
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            bio: String::new(),
            title: String::new(),
            location: String::new(),
            avatar: String::new(),
            social_links: Json(SocialLinks::default()),
            skills: Json(vec![]),
            certifications: Json(vec![]),
            education: Json(vec![]),
            experience: Json(vec![]),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(v) = changes.name {
            user.name = v;
        }
        if let Some(v) = changes.bio {
            user.bio = v;
        }
        if let Some(v) = changes.title {
            user.title = v;
        }
        if let Some(v) = changes.location {
            user.location = v;
        }
        if let Some(v) = changes.avatar {
            user.avatar = v;
        }
        if let Some(v) = changes.social_links {
            user.social_links = Json(v);
        }
        user.updated_at = OffsetDateTime::now_utc();
        Ok(Some(user.clone()))
    }

    async fn replace_section(
        &self,
        id: Uuid,
        section: SectionUpdate,
    ) -> Result<Option<User>, StoreError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        match section {
            SectionUpdate::Skills(v) => user.skills = Json(v),
            SectionUpdate::Certifications(v) => user.certifications = Json(v),
            SectionUpdate::Education(v) => user.education = Json(v),
            SectionUpdate::Experience(v) => user.experience = Json(v),
        }
        user.updated_at = OffsetDateTime::now_utc();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryProjectStore {
    projects: Mutex<Vec<Project>>,
    down: AtomicBool,
}

impl MemoryProjectStore {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.down.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.check()?;
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn list_featured(&self, limit: i64) -> Result<Vec<Project>, StoreError> {
        self.check()?;
        let projects = self.projects.lock().unwrap();
        Ok(projects
            .iter()
            .filter(|p| p.featured)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError> {
        self.check()?;
        let projects = self.projects.lock().unwrap();
        Ok(projects
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        self.check()?;
        let projects = self.projects.lock().unwrap();
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, owner_id: Uuid, new: NewProject) -> Result<Project, StoreError> {
        self.check()?;
        let now = OffsetDateTime::now_utc();
        let project = Project {
            id: Uuid::new_v4(),
            owner_id,
            title: new.title,
            description: new.description,
            image: new.image,
            technologies: new.technologies,
            live_url: new.live_url,
            source_url: new.source_url,
            featured: new.featured,
            created_at: now,
            updated_at: now,
        };
        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProjectUpdate,
    ) -> Result<Option<Project>, StoreError> {
        self.check()?;
        let mut projects = self.projects.lock().unwrap();
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(v) = changes.title {
            project.title = v;
        }
        if let Some(v) = changes.description {
            project.description = v;
        }
        if let Some(v) = changes.image {
            project.image = v;
        }
        if let Some(v) = changes.technologies {
            project.technologies = v;
        }
        if let Some(v) = changes.live_url {
            project.live_url = v;
        }
        if let Some(v) = changes.source_url {
            project.source_url = v;
        }
        if let Some(v) = changes.featured {
            project.featured = v;
        }
        project.updated_at = OffsetDateTime::now_utc();
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.check()?;
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }

    async fn delete_by_owner(&self, owner_id: Uuid) -> Result<u64, StoreError> {
        self.check()?;
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.owner_id != owner_id);
        Ok((before - projects.len()) as u64)
    }
}

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        database_url: "postgres://unused".into(),
        jwt: JwtConfig {
            secret: TEST_SECRET.into(),
            ttl_minutes: 60,
        },
    })
}

/// Router over in-memory stores, plus handles to flip them unavailable.
pub fn test_app() -> (Router, Arc<MemoryUserStore>, Arc<MemoryProjectStore>) {
    let users = Arc::new(MemoryUserStore::default());
    let projects = Arc::new(MemoryProjectStore::default());
    let state = AppState::from_parts(
        test_config(),
        users.clone() as Arc<dyn UserStore>,
        projects.clone() as Arc<dyn ProjectStore>,
    );
    (folio::build_app(state), users, projects)
}

pub fn request(method: &str, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
