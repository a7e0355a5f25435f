use crewdesk_core::id::DocumentId;
use serde::{Deserialize, Serialize};

/// A line manager document. Seeded once; this service never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineManager {
    pub id: DocumentId,
    pub name: String,
    pub email: String,
}
