use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::error::StoreError;
use crate::users::repo_types::{NewUser, ProfileUpdate, SectionUpdate, User};

const USER_COLUMNS: &str = "id, name, email, password_hash, bio, title, location, avatar, \
     social_links, skills, certifications, education, experience, created_at, updated_at";

/// Abstract identity store. Production wiring uses Postgres; tests swap in an
/// in-memory implementation.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;
    async fn update_profile(
        &self,
        id: Uuid,
        changes: ProfileUpdate,
    ) -> Result<Option<User>, StoreError>;
    async fn replace_section(
        &self,
        id: Uuid,
        section: SectionUpdate,
    ) -> Result<Option<User>, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn section_sql(column: &str) -> String {
    format!(
        "UPDATE users SET {column} = $2, updated_at = now() WHERE id = $1 RETURNING {USER_COLUMNS}"
    )
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                name = COALESCE($2, name), \
                bio = COALESCE($3, bio), \
                title = COALESCE($4, title), \
                location = COALESCE($5, location), \
                avatar = COALESCE($6, avatar), \
                social_links = COALESCE($7, social_links), \
                updated_at = now() \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(changes.name)
        .bind(changes.bio)
        .bind(changes.title)
        .bind(changes.location)
        .bind(changes.avatar)
        .bind(changes.social_links.map(Json))
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn replace_section(
        &self,
        id: Uuid,
        section: SectionUpdate,
    ) -> Result<Option<User>, StoreError> {
        let user = match section {
            SectionUpdate::Skills(v) => {
                sqlx::query_as::<_, User>(&section_sql("skills"))
                    .bind(id)
                    .bind(Json(v))
                    .fetch_optional(&self.pool)
                    .await?
            }
            SectionUpdate::Certifications(v) => {
                sqlx::query_as::<_, User>(&section_sql("certifications"))
                    .bind(id)
                    .bind(Json(v))
                    .fetch_optional(&self.pool)
                    .await?
            }
            SectionUpdate::Education(v) => {
                sqlx::query_as::<_, User>(&section_sql("education"))
                    .bind(id)
                    .bind(Json(v))
                    .fetch_optional(&self.pool)
                    .await?
            }
            SectionUpdate::Experience(v) => {
                sqlx::query_as::<_, User>(&section_sql("experience"))
                    .bind(id)
                    .bind(Json(v))
                    .fetch_optional(&self.pool)
                    .await?
            }
        };
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
