use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    auth::{
        extractors::{AuthUser, MaybeUser, ValidJson},
        ownership::authorize_owner,
    },
    error::ApiError,
    projects::dto::{CreateProjectRequest, DeletedResponse, UpdateProjectRequest},
    projects::repo_types::Project,
    state::AppState,
};

/// Featured listing caps at six entries, matching the landing-page grid.
const FEATURED_LIMIT: i64 = 6;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/featured", get(list_featured))
        .route("/projects/me", get(list_mine))
        .route("/projects/user/:user_id", get(list_by_user))
        .route(
            "/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

#[instrument(skip(state, viewer))]
pub async fn list_projects(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
) -> Result<Json<Vec<Project>>, ApiError> {
    debug!(viewer = ?viewer.as_ref().map(|u| u.id), "listing projects");
    let projects = state.projects.list().await?;
    Ok(Json(projects))
}

#[instrument(skip(state))]
pub async fn list_featured(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.projects.list_featured(FEATURED_LIMIT).await?;
    Ok(Json(projects))
}

#[instrument(skip(state, user))]
pub async fn list_mine(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.projects.list_by_owner(user.id).await?;
    Ok(Json(projects))
}

#[instrument(skip(state))]
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.projects.list_by_owner(user_id).await?;
    Ok(Json(projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    Ok(Json(project))
}

#[instrument(skip(state, user, payload))]
pub async fn create_project(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidJson(payload): ValidJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("Title is required".into()));
    }
    let project = state.projects.create(user.id, payload.into()).await?;
    info!(project_id = %project.id, owner_id = %user.id, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

#[instrument(skip(state, user, payload))]
pub async fn update_project(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    authorize_owner(project.owner_id, user.id, "project")?;

    let updated = state
        .projects
        .update(id, payload.into())
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    Ok(Json(updated))
}

#[instrument(skip(state, user))]
pub async fn delete_project(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    authorize_owner(project.owner_id, user.id, "project")?;

    state.projects.delete(id).await?;
    info!(project_id = %id, owner_id = %user.id, "project deleted");
    Ok(Json(DeletedResponse {
        message: "Project deleted successfully".into(),
    }))
}
