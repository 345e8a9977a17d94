// Application state module
// Immutable per-process state shared by every connection

use std::path::PathBuf;
use std::sync::Arc;

use super::types::Config;
use crate::handler::PathResolver;

/// Application state
pub struct AppState {
    pub config: Config,
    pub resolver: PathResolver,

    // Cached config values for fast access
    pub access_log: bool,
}

impl AppState {
    pub fn new(config: &Config, root: PathBuf) -> Self {
        Self {
            config: config.clone(),
            resolver: PathResolver::new(root),
            access_log: config.logging.access_log,
        }
    }

    pub fn shared(config: &Config, root: PathBuf) -> Arc<Self> {
        Arc::new(Self::new(config, root))
    }
}
