use axum::{Json, extract::State};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    config::ErrorMode,
    error::AppError,
    message::{ChatReply, ChatRequest},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let span = tracing::info_span!(
        "chat",
        request_id = %Uuid::new_v4(),
        message_len = payload.message.len(),
        history_len = payload.history.len(),
    );

    async move {
        let reply = match state.error_mode {
            ErrorMode::Legacy => state.relay.handle_chat(&payload).await,
            ErrorMode::Structured => state.relay.try_handle_chat(&payload).await?,
        };
        Ok::<_, AppError>(Json(reply))
    }
    .instrument(span)
    .await
}
