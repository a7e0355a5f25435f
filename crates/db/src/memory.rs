//! In-memory [`DocumentStore`] backend.
//!
//! Backs the repository and HTTP test suites so they run without a live
//! database, mirroring the Postgres backend's observable behaviour.
//! Clones share the same underlying map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crewdesk_core::id::DocumentId;
use serde_json::Value;

use crate::store::{Collection, DocumentStore, StoreError};

type Collections = HashMap<&'static str, Vec<(DocumentId, Value)>>;

/// Mutex-held map backend. Store-native order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Collections) -> T) -> T {
        let mut guard = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> Result<Option<Value>, StoreError> {
        Ok(self.with(|c| {
            c.get(collection.name())
                .and_then(|docs| docs.iter().find(|(doc_id, _)| *doc_id == id))
                .map(|(_, doc)| doc.clone())
        }))
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        Ok(self.with(|c| {
            c.get(collection.name())
                .map(|docs| docs.iter().map(|(_, doc)| doc.clone()).collect())
                .unwrap_or_default()
        }))
    }

    async fn find_by_ref(
        &self,
        collection: Collection,
        field: &'static str,
        id: DocumentId,
    ) -> Result<Vec<Value>, StoreError> {
        let wanted = id.to_string();
        Ok(self.with(|c| {
            c.get(collection.name())
                .map(|docs| {
                    docs.iter()
                        .filter(|(_, doc)| {
                            doc.get(field)
                                .and_then(|snapshot| snapshot.get("id"))
                                .and_then(Value::as_str)
                                == Some(wanted.as_str())
                        })
                        .map(|(_, doc)| doc.clone())
                        .collect()
                })
                .unwrap_or_default()
        }))
    }

    async fn insert(
        &self,
        collection: Collection,
        id: DocumentId,
        doc: &Value,
    ) -> Result<(), StoreError> {
        let doc = doc.clone();
        self.with(|c| c.entry(collection.name()).or_default().push((id, doc)));
        Ok(())
    }

    async fn replace(
        &self,
        collection: Collection,
        id: DocumentId,
        doc: &Value,
    ) -> Result<bool, StoreError> {
        let doc = doc.clone();
        Ok(self.with(|c| {
            let Some(docs) = c.get_mut(collection.name()) else {
                return false;
            };
            match docs.iter_mut().find(|(doc_id, _)| *doc_id == id) {
                Some(entry) => {
                    entry.1 = doc;
                    true
                }
                None => false,
            }
        }))
    }

    async fn delete(&self, collection: Collection, id: DocumentId) -> Result<bool, StoreError> {
        Ok(self.with(|c| {
            let Some(docs) = c.get_mut(collection.name()) else {
                return false;
            };
            let before = docs.len();
            docs.retain(|(doc_id, _)| *doc_id != id);
            docs.len() < before
        }))
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        Ok(self.with(|c| c.get(collection.name()).map(|docs| docs.len() as u64).unwrap_or(0)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
