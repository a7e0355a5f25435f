//! Route definitions for the project aggregate.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// GET    /projects                        -> list
/// GET    /projects/{id}                   -> get_by_id
/// POST   /create_project                  -> create
/// PUT    /update_project/{id}             -> update
/// DELETE /delete_project/{id}             -> delete
/// GET    /projects_dep/{department_id}    -> list_by_department
/// GET    /projetcs_mng/{line_manager_id}  -> list_by_line_manager
/// ```
///
/// The path spellings, `projetcs_mng` included, are the published interface
/// of the service this replaces and are kept verbatim.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route("/projects/{id}", get(project::get_by_id))
        .route("/create_project", post(project::create))
        .route("/update_project/{id}", put(project::update))
        .route("/delete_project/{id}", delete(project::delete))
        .route(
            "/projects_dep/{department_id}",
            get(project::list_by_department),
        )
        .route(
            "/projetcs_mng/{line_manager_id}",
            get(project::list_by_line_manager),
        )
}
