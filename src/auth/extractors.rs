use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRef, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo_types::User;

/// Mandatory authentication gate: rejects the request unless a valid bearer
/// token resolves to a live identity.
pub struct AuthUser(pub User);

/// Optional authentication gate: never rejects. Any failure along the
/// resolution path (no token, bad token, unknown identity, store outage)
/// degrades to an anonymous requester.
pub struct MaybeUser(pub Option<User>);

/// Full gate resolution: header -> token -> claims -> live identity.
/// Sequencing matters; nothing downstream runs until this settles.
async fn resolve_identity(parts: &Parts, state: &AppState) -> Result<User, ApiError> {
    let header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .ok_or(ApiError::InvalidAuthScheme)?;

    let keys = JwtKeys::from_ref(state);
    let claims = keys.verify(token).map_err(|e| {
        warn!(reason = %e, "token rejected");
        ApiError::Token(e)
    })?;

    // The token may outlive the account; a deleted identity must not
    // authenticate even with a valid signature.
    let user = state
        .users
        .find_by_id(claims.sub)
        .await?
        .ok_or(ApiError::IdentityNotFound)?;

    Ok(user)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_identity(parts, state).await.map(AuthUser)
    }
}

/// Json body extractor that routes deserialization failures through the
/// shared error taxonomy: a missing or malformed body is a validation
/// problem, not an unprocessable entity.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::Validation(e.body_text()))?;
        Ok(ValidJson(value))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(resolve_identity(parts, state).await.ok()))
    }
}
