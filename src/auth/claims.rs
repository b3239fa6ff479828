use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload. The token is a stateless bearer credential: everything the
/// server needs to re-authenticate a request lives inside the signed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user ID
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
}
