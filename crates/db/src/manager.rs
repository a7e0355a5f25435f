//! Project aggregate manager.
//!
//! Orchestrates project CRUD over the document store, embedding snapshots
//! of the referenced department and line manager at write time. A create is
//! three independent store operations (two resolutions, one insert) with no
//! rollback; the reads come first, so a failure never leaves partial state.

use std::sync::Arc;

use crewdesk_core::error::CoreError;
use crewdesk_core::id::DocumentId;

use crate::models::department::Department;
use crate::models::line_manager::LineManager;
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::resolver;
use crate::store::{decode_document, encode_document, Collection, DocumentStore, StoreError};

/// Errors from aggregate operations: domain failures or store failures.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates CRUD for the project aggregate.
///
/// Holds the store adapter it was constructed with (one instance per
/// process, injected at startup); all operations run against that instance.
#[derive(Clone)]
pub struct ProjectManager {
    store: Arc<dyn DocumentStore>,
}

impl ProjectManager {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All projects, embedded snapshots included, in store-native order.
    pub async fn list(&self) -> Result<Vec<Project>, ManagerError> {
        let docs = self.store.list(Collection::Projects).await?;
        docs.into_iter()
            .map(|doc| decode_document(Collection::Projects, doc).map_err(ManagerError::from))
            .collect()
    }

    /// One project by id.
    pub async fn get(&self, id: DocumentId) -> Result<Project, ManagerError> {
        let doc = self
            .store
            .get(Collection::Projects, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
        Ok(decode_document(Collection::Projects, doc)?)
    }

    /// Create a project, embedding snapshots of both references.
    ///
    /// Returns the freshly generated project id.
    pub async fn create(&self, input: CreateProject) -> Result<DocumentId, ManagerError> {
        let (line_manager, department) = self
            .resolve_references(input.line_manager, input.department)
            .await?;

        let id = DocumentId::generate();
        let project = Project {
            id,
            title: input.title,
            description: input.description,
            has_role_opening: input.has_role_opening,
            line_manager,
            department,
        };

        let doc = encode_document(Collection::Projects, &project)?;
        self.store.insert(Collection::Projects, id, &doc).await?;
        tracing::info!(%id, "Project created");
        Ok(id)
    }

    /// Apply a partial update: each present field overwrites the stored
    /// value. Reference fields are re-resolved into fresh snapshots with
    /// the same validation as create.
    pub async fn update(&self, id: DocumentId, partial: UpdateProject) -> Result<(), ManagerError> {
        let mut project = self.get(id).await?;

        if let Some(title) = partial.title {
            project.title = title;
        }
        if let Some(manager_id) = partial.line_manager {
            let manager_id = DocumentId::parse(&manager_id)?;
            project.line_manager = resolver::resolve_line_manager(self.store.as_ref(), manager_id)
                .await?
                .ok_or(CoreError::UnknownReference {
                    entity: "Line manager",
                })?;
        }
        if let Some(department_id) = partial.department {
            let department_id = DocumentId::parse(&department_id)?;
            project.department = resolver::resolve_department(self.store.as_ref(), department_id)
                .await?
                .ok_or(CoreError::UnknownReference {
                    entity: "Department",
                })?;
        }
        if let Some(description) = partial.description {
            project.description = description;
        }
        if let Some(has_role_opening) = partial.has_role_opening {
            project.has_role_opening = has_role_opening;
        }

        let doc = encode_document(Collection::Projects, &project)?;
        let replaced = self.store.replace(Collection::Projects, id, &doc).await?;
        if !replaced {
            // Deleted between our read and write; surface it rather than
            // silently dropping the update.
            return Err(CoreError::NotFound {
                entity: "Project",
                id,
            }
            .into());
        }
        Ok(())
    }

    /// Delete a project by id.
    pub async fn delete(&self, id: DocumentId) -> Result<(), ManagerError> {
        let deleted = self.store.delete(Collection::Projects, id).await?;
        if deleted {
            tracing::info!(%id, "Project deleted");
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Project",
                id,
            }
            .into())
        }
    }

    /// All projects whose embedded department snapshot has the given id.
    pub async fn list_by_department(&self, id: DocumentId) -> Result<Vec<Project>, ManagerError> {
        resolver::resolve_department(self.store.as_ref(), id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Department",
                id,
            })?;

        let docs = self
            .store
            .find_by_ref(Collection::Projects, "department", id)
            .await?;
        docs.into_iter()
            .map(|doc| decode_document(Collection::Projects, doc).map_err(ManagerError::from))
            .collect()
    }

    /// All projects whose embedded line manager snapshot has the given id.
    pub async fn list_by_line_manager(&self, id: DocumentId) -> Result<Vec<Project>, ManagerError> {
        resolver::resolve_line_manager(self.store.as_ref(), id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Line manager",
                id,
            })?;

        let docs = self
            .store
            .find_by_ref(Collection::Projects, "line_manager", id)
            .await?;
        docs.into_iter()
            .map(|doc| decode_document(Collection::Projects, doc).map_err(ManagerError::from))
            .collect()
    }

    /// Resolve both references for a write.
    ///
    /// Both lookups run before either result is checked; the line manager
    /// result is checked first, the department second, so when both are
    /// missing the line manager error is the one reported.
    async fn resolve_references(
        &self,
        line_manager: DocumentId,
        department: DocumentId,
    ) -> Result<(LineManager, Department), ManagerError> {
        let manager = resolver::resolve_line_manager(self.store.as_ref(), line_manager).await?;
        let department = resolver::resolve_department(self.store.as_ref(), department).await?;

        let manager = manager.ok_or(CoreError::UnknownReference {
            entity: "Line manager",
        })?;
        let department = department.ok_or(CoreError::UnknownReference {
            entity: "Department",
        })?;
        Ok((manager, department))
    }
}
