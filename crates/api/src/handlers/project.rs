//! Handlers for the project aggregate endpoints.
//!
//! Path identifiers arrive as raw strings and go through
//! [`DocumentId::parse`] here, so every malformed token produces the same
//! 400 regardless of which route it came in on.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use crewdesk_core::id::DocumentId;
use crewdesk_db::models::project::{CreateProjectRequest, Project, UpdateProject};

use crate::error::AppResult;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.manager.list().await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = DocumentId::parse(&id)?;
    let project = state.manager.get(id).await?;
    Ok(Json(project))
}

/// POST /create_project
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let input = payload.validate()?;
    let id = state.manager.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Project created successfully",
            project_id: id.to_string(),
        }),
    ))
}

/// PUT /update_project/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(partial): Json<UpdateProject>,
) -> AppResult<Json<MessageResponse>> {
    let id = DocumentId::parse(&id)?;
    state.manager.update(id, partial).await?;
    Ok(Json(MessageResponse {
        message: "Project updated successfully",
    }))
}

/// DELETE /delete_project/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = DocumentId::parse(&id)?;
    state.manager.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}

/// GET /projects_dep/{department_id}
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let id = DocumentId::parse(&department_id)?;
    let projects = state.manager.list_by_department(id).await?;
    Ok(Json(projects))
}

/// GET /projetcs_mng/{line_manager_id}
pub async fn list_by_line_manager(
    State(state): State<AppState>,
    Path(line_manager_id): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let id = DocumentId::parse(&line_manager_id)?;
    let projects = state.manager.list_by_line_manager(id).await?;
    Ok(Json(projects))
}
