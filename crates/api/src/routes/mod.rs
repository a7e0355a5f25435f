pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health is mounted separately at root).
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(project::router())
}
