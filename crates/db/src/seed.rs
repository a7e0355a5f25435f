//! Reference-data seeding.
//!
//! Seeding is a separately invokable operation (see the `crewdesk-seed`
//! binary), not part of server startup. Each seed checks its collection is
//! empty first and no-ops otherwise, so re-running it is harmless.

use crewdesk_core::id::DocumentId;

use crate::models::department::Department;
use crate::models::line_manager::LineManager;
use crate::store::{encode_document, Collection, DocumentStore, StoreError};

const DEPARTMENT_NAMES: [&str; 3] = ["Agile Hub", "Cyber Security", "AI"];

const LINE_MANAGER_NAMES: [&str; 3] = ["John Smith", "Alicia Reyes", "Adrian Ionescu"];

/// Insert the default departments if the collection is empty.
pub async fn seed_departments(store: &dyn DocumentStore) -> Result<(), StoreError> {
    if store.count(Collection::Departments).await? > 0 {
        tracing::info!("Departments already exist, skipping seed");
        return Ok(());
    }

    for name in DEPARTMENT_NAMES {
        let department = Department {
            id: DocumentId::generate(),
            name: name.to_string(),
        };
        let doc = encode_document(Collection::Departments, &department)?;
        store
            .insert(Collection::Departments, department.id, &doc)
            .await?;
    }
    tracing::info!("Departments seeded");
    Ok(())
}

/// Insert the default line managers if the collection is empty.
///
/// Emails are derived from the name: lowercased, spaces removed, at
/// `example.com`.
pub async fn seed_line_managers(store: &dyn DocumentStore) -> Result<(), StoreError> {
    if store.count(Collection::LineManagers).await? > 0 {
        tracing::info!("Line managers already exist, skipping seed");
        return Ok(());
    }

    for name in LINE_MANAGER_NAMES {
        let manager = LineManager {
            id: DocumentId::generate(),
            name: name.to_string(),
            email: format!("{}@example.com", name.replace(' ', "").to_lowercase()),
        };
        let doc = encode_document(Collection::LineManagers, &manager)?;
        store
            .insert(Collection::LineManagers, manager.id, &doc)
            .await?;
    }
    tracing::info!("Line managers seeded");
    Ok(())
}

/// Run both seeds.
pub async fn seed_reference_data(store: &dyn DocumentStore) -> Result<(), StoreError> {
    seed_departments(store).await?;
    seed_line_managers(store).await
}
