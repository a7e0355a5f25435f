use std::sync::Arc;

use crewdesk_db::{DocumentStore, ProjectManager};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store adapter is behind `Arc` and shared with the
/// manager.
#[derive(Clone)]
pub struct AppState {
    /// Project aggregate manager bound to the process-wide store adapter.
    pub manager: ProjectManager,
    /// The store adapter itself, for the health probe.
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
