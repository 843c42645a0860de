//! Shared application state for request handlers.

use std::sync::Arc;

use tera::Tera;

use crate::config::ServerConfig;
use crate::metadata::ImdsClient;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything here is read-only after startup: the configuration, the Tera
/// template engine, and the instance-metadata client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub tera: Arc<Tera>,
    pub metadata: ImdsClient,
}

impl AppState {
    /// Creates a new application state from the given configuration,
    /// templates, and metadata client.
    pub fn new(config: ServerConfig, tera: Tera, metadata: ImdsClient) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            metadata,
        }
    }
}
