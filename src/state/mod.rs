use std::sync::Arc;

use crate::config::ServerConfig;
use crate::handlers::{message, transfer};
use crate::swaig::SwaigRegistry;

/// Application state shared across handlers
///
/// Both members are immutable after construction: the configuration is
/// loaded once at startup, and the registry is populated with the built-in
/// functions before the server starts serving.
pub struct AppState {
    pub config: ServerConfig,
    pub registry: SwaigRegistry,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let mut registry = SwaigRegistry::new();
        registry.register(transfer::spec());
        registry.register(message::spec());

        Arc::new(Self { config, registry })
    }
}
