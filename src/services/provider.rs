use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single completion call, classified at the adapter boundary.
///
/// `Display` yields only the human-readable message so the legacy reply reads
/// `Gemini Error: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    Quota(String),
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    MalformedResponse(String),
    #[error("{message}")]
    Upstream { status: u16, message: String },
}

impl ProviderError {
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Network(_) => "network",
            ProviderError::Auth(_) => "auth",
            ProviderError::Quota(_) => "quota",
            ProviderError::Timeout(_) => "timeout",
            ProviderError::MalformedResponse(_) => "malformed_response",
            ProviderError::Upstream { .. } => "upstream",
        }
    }
}

/// Text-completion capability: one prompt in, generated text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
