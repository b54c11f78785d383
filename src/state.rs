// src/state.rs
use std::sync::Arc;

use crate::config::ErrorMode;
use crate::services::provider::CompletionProvider;
use crate::services::relay::ChatRelay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
    pub error_mode: ErrorMode,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, error_mode: ErrorMode) -> Self {
        Self {
            relay: ChatRelay::new(provider),
            error_mode,
        }
    }
}
