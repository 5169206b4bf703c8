use axum::{
  Json,
  body::Body,
  extract::{State, rejection::JsonRejection},
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use portfolio_shared::{AppError, ChatMessage};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::gateway::CompletionOutcome;
use crate::utils::AppState;

pub const RATE_LIMIT_MESSAGE: &str = "Rate limits exceeded, please try again later.";
pub const PAYMENT_MESSAGE: &str = "Payment required, please try again later.";
const GATEWAY_ERROR_MESSAGE: &str = "AI gateway error";
const LOG_BODY_LIMIT: usize = 512;

#[derive(Deserialize, ToSchema)]
pub struct ChatRequest {
  /// Conversation so far, oldest first. No local cap; the gateway enforces
  /// its own limits.
  pub messages: Vec<ChatMessage>,
}

/// Relay a conversation to the completion gateway and stream the reply back.
#[utoipa::path(
  post,
  path = "/portfolio-chat",
  request_body = ChatRequest,
  responses(
    (status = 200, description = "Upstream SSE stream, relayed verbatim"),
    (status = 402, description = "Upstream requires payment"),
    (status = 429, description = "Upstream rate limit hit"),
    (status = 500, description = "Missing credential or gateway failure")
  )
)]
#[axum::debug_handler]
pub async fn portfolio_chat(
  State(state): State<AppState>,
  payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, AppError> {
  let Json(payload) = payload.map_err(AppError::new)?;

  let Some(gateway) = state.gateway.clone() else {
    return Err(AppError::new(anyhow::anyhow!(
      "AI_GATEWAY_API_KEY is not configured"
    )));
  };

  tracing::info!(messages = payload.messages.len(), "processing chat request");

  let response = match gateway.stream_completion(payload.messages).await? {
    CompletionOutcome::Stream(stream) => Response::builder()
      .status(StatusCode::OK)
      .header(header::CONTENT_TYPE, "text/event-stream")
      .body(Body::from_stream(stream))
      .map_err(AppError::new)?,
    CompletionOutcome::RateLimited => (
      StatusCode::TOO_MANY_REQUESTS,
      Json(json!({ "error": RATE_LIMIT_MESSAGE })),
    )
      .into_response(),
    CompletionOutcome::PaymentRequired => (
      StatusCode::PAYMENT_REQUIRED,
      Json(json!({ "error": PAYMENT_MESSAGE })),
    )
      .into_response(),
    CompletionOutcome::Failed { status, body } => {
      tracing::error!(status, body = truncate(&body), "AI gateway error");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": GATEWAY_ERROR_MESSAGE })),
      )
        .into_response()
    }
  };

  Ok(response)
}

/// Empty 200 for CORS preflight; the headers come from the router layers.
pub async fn preflight() -> StatusCode {
  StatusCode::OK
}

fn truncate(body: &str) -> &str {
  match body.char_indices().nth(LOG_BODY_LIMIT) {
    Some((idx, _)) => &body[..idx],
    None => body,
  }
}
