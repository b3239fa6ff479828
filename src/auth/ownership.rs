use uuid::Uuid;

use crate::error::ApiError;

/// Ownership is the only authorization axis in this model: a resource may be
/// mutated only by the identity that owns it. No roles, no admin override.
pub fn authorize_owner(
    owner_id: Uuid,
    requester_id: Uuid,
    resource: &'static str,
) -> Result<(), ApiError> {
    if owner_id == requester_id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_allowed() {
        let id = Uuid::new_v4();
        assert!(authorize_owner(id, id, "project").is_ok());
    }

    #[test]
    fn non_owner_is_denied() {
        let err = authorize_owner(Uuid::new_v4(), Uuid::new_v4(), "project").unwrap_err();
        assert!(matches!(err, ApiError::Forbidden("project")));
    }
}
