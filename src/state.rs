use std::sync::Arc;

use crate::config::Config;
use crate::llm::CompletionClient;

/// Shared handler state. Everything here is immutable after startup, so
/// concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn CompletionClient>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
        }
    }
}
