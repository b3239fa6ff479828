use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::projects::repo_types::{NewProject, Project, ProjectUpdate};

const PROJECT_COLUMNS: &str = "id, owner_id, title, description, image, technologies, \
     live_url, source_url, featured, created_at, updated_at";

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, StoreError>;
    async fn list_featured(&self, limit: i64) -> Result<Vec<Project>, StoreError>;
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, StoreError>;
    async fn create(&self, owner_id: Uuid, new: NewProject) -> Result<Project, StoreError>;
    async fn update(
        &self,
        id: Uuid,
        changes: ProjectUpdate,
    ) -> Result<Option<Project>, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
    /// Application-layer cascade used by account deletion.
    async fn delete_by_owner(&self, owner_id: Uuid) -> Result<u64, StoreError>;
}

pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_featured(&self, limit: i64) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE featured ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, owner_id: Uuid, new: NewProject) -> Result<Project, StoreError> {
        let row = sqlx::query_as::<_, Project>(&format!(
            "INSERT INTO projects \
                (owner_id, title, description, image, technologies, live_url, source_url, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(owner_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.image)
        .bind(&new.technologies)
        .bind(&new.live_url)
        .bind(&new.source_url)
        .bind(new.featured)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProjectUpdate,
    ) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, Project>(&format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                image = COALESCE($4, image), \
                technologies = COALESCE($5, technologies), \
                live_url = COALESCE($6, live_url), \
                source_url = COALESCE($7, source_url), \
                featured = COALESCE($8, featured), \
                updated_at = now() \
             WHERE id = $1 RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.image)
        .bind(changes.technologies)
        .bind(changes.live_url)
        .bind(changes.source_url)
        .bind(changes.featured)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_owner(&self, owner_id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE owner_id = $1")
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
