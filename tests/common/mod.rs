#![allow(dead_code)]
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pathfinder_relay::services::provider::{CompletionProvider, ProviderError};

/// Returns the same scripted outcome for every call and records the prompts it saw.
pub struct ScriptedProvider {
    outcome: Result<String, ProviderError>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self { outcome: Ok(text.to_string()), prompts: Mutex::new(Vec::new()) })
    }

    pub fn failing(err: ProviderError) -> Arc<Self> {
        Arc::new(Self { outcome: Err(err), prompts: Mutex::new(Vec::new()) })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outcome.clone()
    }
}

/// Echoes the user message back after a delay that depends on its length,
/// so concurrent calls finish out of order.
pub struct EchoProvider;

#[async_trait]
impl CompletionProvider for EchoProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let message = prompt.rsplit("User Message: ").next().unwrap_or_default().to_string();
        let delay = 40u64.saturating_sub(message.len() as u64);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(format!("echo: {message}"))
    }
}
