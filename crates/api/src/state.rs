use std::sync::Arc;

use lumen_baas::ContentSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Where every collection is read from (document store or fixture).
    pub source: Arc<dyn ContentSource>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
