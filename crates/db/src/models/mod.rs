//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct matching the stored document
//! - Request DTOs where the entity has write endpoints

pub mod department;
pub mod line_manager;
pub mod project;
