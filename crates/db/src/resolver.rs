//! Read-only lookups of reference documents.
//!
//! These are the two lookups the aggregate manager leans on when embedding
//! snapshots: fetch the full current document, or report that it is absent.
//! No mutation, no side effects.

use crewdesk_core::id::DocumentId;

use crate::models::department::Department;
use crate::models::line_manager::LineManager;
use crate::store::{decode_document, Collection, DocumentStore, StoreError};

/// Fetch the current department snapshot, or `None` if absent.
pub async fn resolve_department(
    store: &dyn DocumentStore,
    id: DocumentId,
) -> Result<Option<Department>, StoreError> {
    match store.get(Collection::Departments, id).await? {
        Some(doc) => Ok(Some(decode_document(Collection::Departments, doc)?)),
        None => Ok(None),
    }
}

/// Fetch the current line manager snapshot, or `None` if absent.
pub async fn resolve_line_manager(
    store: &dyn DocumentStore,
    id: DocumentId,
) -> Result<Option<LineManager>, StoreError> {
    match store.get(Collection::LineManagers, id).await? {
        Some(doc) => Ok(Some(decode_document(Collection::LineManagers, doc)?)),
        None => Ok(None),
    }
}
