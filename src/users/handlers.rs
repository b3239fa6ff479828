use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::{
        extractors::{AuthUser, ValidJson},
        ownership::authorize_owner,
    },
    error::ApiError,
    state::AppState,
    users::dto::{
        CertificationsRequest, DeletedResponse, EducationRequest, ExperienceRequest,
        SkillsRequest, UpdateProfileRequest,
    },
    users::repo_types::{SectionUpdate, User},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/me", get(me).put(update_me).delete(delete_me))
        .route("/users/me/skills", put(update_skills))
        .route("/users/me/certifications", put(update_certifications))
        .route("/users/me/education", put(update_education))
        .route("/users/me/experience", put(update_experience))
        .route("/users/:id", get(get_user).put(update_user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(user))
}

#[instrument(skip_all)]
pub async fn me(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}

#[instrument(skip(state, user, payload))]
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidJson(payload): ValidJson<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    let updated = state
        .users
        .update_profile(user.id, payload.into())
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(updated))
}

/// Same as `update_me`, but addressed by id; only the owner may hit it.
#[instrument(skip(state, user, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    authorize_owner(id, user.id, "profile")?;
    let updated = state
        .users
        .update_profile(id, payload.into())
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(updated))
}

// Section routes replace the stored array wholesale: last write wins, no
// merging of concurrent edits.

#[instrument(skip(state, user, payload))]
pub async fn update_skills(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidJson(payload): ValidJson<SkillsRequest>,
) -> Result<Json<User>, ApiError> {
    replace_section(&state, user.id, SectionUpdate::Skills(payload.skills)).await
}

#[instrument(skip(state, user, payload))]
pub async fn update_certifications(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidJson(payload): ValidJson<CertificationsRequest>,
) -> Result<Json<User>, ApiError> {
    replace_section(
        &state,
        user.id,
        SectionUpdate::Certifications(payload.certifications),
    )
    .await
}

#[instrument(skip(state, user, payload))]
pub async fn update_education(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidJson(payload): ValidJson<EducationRequest>,
) -> Result<Json<User>, ApiError> {
    replace_section(&state, user.id, SectionUpdate::Education(payload.education)).await
}

#[instrument(skip(state, user, payload))]
pub async fn update_experience(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidJson(payload): ValidJson<ExperienceRequest>,
) -> Result<Json<User>, ApiError> {
    replace_section(&state, user.id, SectionUpdate::Experience(payload.experience)).await
}

async fn replace_section(
    state: &AppState,
    user_id: Uuid,
    section: SectionUpdate,
) -> Result<Json<User>, ApiError> {
    let updated = state
        .users
        .replace_section(user_id, section)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(updated))
}

/// Account deletion cascades in the application layer: owned projects first,
/// then the identity itself.
#[instrument(skip(state, user))]
pub async fn delete_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<DeletedResponse>, ApiError> {
    let removed = state.projects.delete_by_owner(user.id).await?;
    state.users.delete(user.id).await?;
    info!(user_id = %user.id, projects_removed = removed, "user deleted");
    Ok(Json(DeletedResponse {
        message: "User deleted successfully".into(),
    }))
}
