// src/services/gemini.rs
use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::provider::{CompletionProvider, ProviderError};
use crate::config::Config;

/// Gemini `generateContent` adapter. Built once at startup and shared.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let model = model.into();

        Ok(Self {
            http: builder.build()?,
            endpoint: generate_endpoint(api_base, &model),
            model,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            &config.api_base,
            config.request_timeout,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!(model = %self.model, prompt_len = prompt.len(), "calling Gemini");

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let raw = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let err = classify_status(status, &raw);
            warn!(status = status.as_u16(), kind = err.kind(), "Gemini rejected request");
            return Err(err);
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&raw).map_err(|e| {
            ProviderError::MalformedResponse(format!("could not decode Gemini response: {e}"))
        })?;

        extract_text(parsed)
    }
}

pub fn generate_endpoint(api_base: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        api_base.trim_end_matches('/'),
        model
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Join the text parts of the first candidate.
pub fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(ProviderError::MalformedResponse(format!(
            "response contained no text (block reason: {reason})"
        )));
    };

    let texts: Vec<String> = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if texts.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(ProviderError::MalformedResponse(format!(
            "response contained no text (finish reason: {reason})"
        )));
    }

    Ok(texts.concat())
}

/// Map a non-success HTTP status and its body to a provider error.
pub fn classify_status(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|env| env.error.message)
        .ok()
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| status.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::Quota(message),
        _ => ProviderError::Upstream { status: status.as_u16(), message },
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(err.to_string())
    } else if err.is_decode() {
        ProviderError::MalformedResponse(err.to_string())
    } else {
        ProviderError::Network(err.to_string())
    }
}
