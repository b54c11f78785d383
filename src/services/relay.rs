use std::sync::Arc;

use tracing::{info, warn};

use super::{
    prompt::compose_prompt,
    provider::{CompletionProvider, ProviderError},
};
use crate::message::{ChatReply, ChatRequest};

pub const ERROR_PREFIX: &str = "Gemini Error: ";

/// Composes the prompt for one chat message and asks the provider for a reply.
#[derive(Clone)]
pub struct ChatRelay {
    provider: Arc<dyn CompletionProvider>,
}

impl ChatRelay {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// One provider attempt, with the failure kept classified.
    pub async fn try_handle_chat(&self, request: &ChatRequest) -> Result<ChatReply, ProviderError> {
        let prompt = compose_prompt(&request.message, &request.history);

        match self.provider.complete(&prompt).await {
            Ok(text) => {
                info!(reply_len = text.len(), "completion succeeded");
                Ok(ChatReply::new(text))
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "completion failed");
                Err(err)
            }
        }
    }

    /// Legacy contract: a failure becomes a normal reply carrying `Gemini Error: ...`.
    pub async fn handle_chat(&self, request: &ChatRequest) -> ChatReply {
        self.try_handle_chat(request)
            .await
            .unwrap_or_else(|err| legacy_error_reply(&err))
    }
}

pub fn legacy_error_reply(err: &ProviderError) -> ChatReply {
    ChatReply::new(format!("{ERROR_PREFIX}{err}"))
}
