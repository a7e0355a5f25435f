//! Tests for the reference-data seeding operation.

use crewdesk_core::id::DocumentId;
use crewdesk_db::models::line_manager::LineManager;
use crewdesk_db::seed;
use crewdesk_db::{Collection, DocumentStore, MemoryStore};
use serde_json::json;

#[tokio::test]
async fn seed_inserts_reference_data_once() {
    let store = MemoryStore::new();

    seed::seed_reference_data(&store).await.unwrap();
    assert_eq!(store.count(Collection::Departments).await.unwrap(), 3);
    assert_eq!(store.count(Collection::LineManagers).await.unwrap(), 3);

    // Re-running is an idempotent no-op.
    seed::seed_reference_data(&store).await.unwrap();
    assert_eq!(store.count(Collection::Departments).await.unwrap(), 3);
    assert_eq!(store.count(Collection::LineManagers).await.unwrap(), 3);
}

#[tokio::test]
async fn seeded_line_managers_have_derived_emails() {
    let store = MemoryStore::new();
    seed::seed_reference_data(&store).await.unwrap();

    let managers: Vec<LineManager> = store
        .list(Collection::LineManagers)
        .await
        .unwrap()
        .into_iter()
        .map(|doc| serde_json::from_value(doc).unwrap())
        .collect();

    let mut emails: Vec<_> = managers.iter().map(|m| m.email.as_str()).collect();
    emails.sort_unstable();
    assert_eq!(
        emails,
        [
            "adrianionescu@example.com",
            "aliciareyes@example.com",
            "johnsmith@example.com",
        ]
    );
}

#[tokio::test]
async fn seed_skips_collections_that_already_hold_data() {
    let store = MemoryStore::new();

    let id = DocumentId::generate();
    let doc = json!({ "id": id.to_string(), "name": "Pre-existing" });
    store
        .insert(Collection::Departments, id, &doc)
        .await
        .unwrap();

    seed::seed_reference_data(&store).await.unwrap();

    // Departments untouched, line managers seeded normally.
    assert_eq!(store.count(Collection::Departments).await.unwrap(), 1);
    assert_eq!(store.count(Collection::LineManagers).await.unwrap(), 3);
}
