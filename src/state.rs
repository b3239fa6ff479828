use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::projects::repo::{PgProjectStore, ProjectStore};
use crate::users::repo::{PgUserStore, UserStore};

/// Process-wide immutable wiring: configuration plus the store interfaces.
/// Stores are trait objects so the auth gate and handlers can be exercised
/// against in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub projects: Arc<dyn ProjectStore>,
}

impl AppState {
    /// Production wiring: both stores share one Postgres pool.
    pub fn from_pool(pool: PgPool, config: Arc<AppConfig>) -> Self {
        Self {
            config,
            users: Arc::new(PgUserStore::new(pool.clone())),
            projects: Arc::new(PgProjectStore::new(pool)),
        }
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        projects: Arc<dyn ProjectStore>,
    ) -> Self {
        Self {
            config,
            users,
            projects,
        }
    }
}
