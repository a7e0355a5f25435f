use crewdesk_core::id::DocumentId;
use serde::{Deserialize, Serialize};

/// A department document. Seeded once; this service never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DocumentId,
    pub name: String,
}
