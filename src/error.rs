// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::{provider::ProviderError, relay::legacy_error_reply};

#[derive(Debug, Error)]
pub enum AppError {
    /// Only produced in structured error mode.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Provider(err) => match err {
                ProviderError::Quota(_) => StatusCode::TOO_MANY_REQUESTS,
                ProviderError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                ProviderError::Auth(_)
                | ProviderError::Network(_)
                | ProviderError::MalformedResponse(_)
                | ProviderError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let AppError::Provider(err) = &self;
        let body = json!({
            "reply": legacy_error_reply(err).reply,
            "error": {
                "kind": err.kind(),
                "message": err.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
