//! Personal portfolio API: JWT-authenticated profile and project management
//! over Postgres, with ownership-scoped mutations.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod projects;
pub mod state;
pub mod users;

pub use app::{build_app, serve};
pub use config::AppConfig;
pub use state::AppState;
