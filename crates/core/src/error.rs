use crate::id::DocumentId;

/// Domain-level errors surfaced by the storage and aggregate layers.
///
/// Every variant maps to a client-facing 4xx response; store failures are a
/// separate type at the storage seam (`StoreError` in `crewdesk-db`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The supplied token is not a well-formed document identifier.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A required field was absent from a create payload.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A referenced document does not exist in its collection.
    ///
    /// Raised when a write names a department or line manager that cannot
    /// be resolved; distinct from [`CoreError::NotFound`] because it maps
    /// to 400, not 404.
    #[error("{entity} not found")]
    UnknownReference { entity: &'static str },

    /// No document with the given id exists.
    #[error("{entity} not found")]
    NotFound {
        entity: &'static str,
        id: DocumentId,
    },
}
