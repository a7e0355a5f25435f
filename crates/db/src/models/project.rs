//! Project entity and DTOs.

use crewdesk_core::error::CoreError;
use crewdesk_core::id::DocumentId;
use serde::{Deserialize, Serialize};

use crate::models::department::Department;
use crate::models::line_manager::LineManager;

/// A project document with its embedded reference snapshots.
///
/// `line_manager` and `department` are point-in-time copies taken when the
/// project was written; later changes to the source documents do not
/// propagate here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub has_role_opening: bool,
    pub line_manager: LineManager,
    pub department: Department,
}

/// Raw create payload as it arrives over the wire.
///
/// Every field is optional so that presence can be checked explicitly, in
/// declared order, and the first absent field named in the error; see
/// [`CreateProjectRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub line_manager: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub has_role_opening: Option<bool>,
}

/// A validated create payload with both reference ids parsed.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub line_manager: DocumentId,
    pub department: DocumentId,
    pub description: String,
    pub has_role_opening: bool,
}

impl CreateProjectRequest {
    /// Check field presence in declared order (title, line_manager,
    /// department, description, has_role_opening), then parse both
    /// reference ids.
    pub fn validate(self) -> Result<CreateProject, CoreError> {
        let title = self.title.ok_or(CoreError::MissingField("title"))?;
        let line_manager = self
            .line_manager
            .ok_or(CoreError::MissingField("line_manager"))?;
        let department = self
            .department
            .ok_or(CoreError::MissingField("department"))?;
        let description = self
            .description
            .ok_or(CoreError::MissingField("description"))?;
        let has_role_opening = self
            .has_role_opening
            .ok_or(CoreError::MissingField("has_role_opening"))?;

        Ok(CreateProject {
            title,
            line_manager: DocumentId::parse(&line_manager)?,
            department: DocumentId::parse(&department)?,
            description,
            has_role_opening,
        })
    }
}

/// Partial update payload. Present fields overwrite the stored values;
/// reference fields are re-resolved into fresh snapshots by the manager.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub line_manager: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub has_role_opening: Option<bool>,
}
