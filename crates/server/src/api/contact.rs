use axum::{Json, extract::State, http::StatusCode};
use portfolio_contact::SubmitError;
use portfolio_shared::{AppError, ContactMessage};
use serde_json::{Value, json};

use crate::utils::AppState;

/// Validate a contact message and relay it to the configured backend.
#[utoipa::path(
  post,
  path = "/contact",
  request_body = ContactMessage,
  responses(
    (status = 200, description = "Message relayed to the contact backend"),
    (status = 400, description = "Missing field or malformed email"),
    (status = 409, description = "A submission is already in flight"),
    (status = 502, description = "Backend unreachable or reported failure")
  )
)]
#[axum::debug_handler]
pub async fn contact(
  State(state): State<AppState>,
  Json(payload): Json<ContactMessage>,
) -> Result<Json<Value>, AppError> {
  match state.relay.submit(&payload).await {
    Ok(()) => Ok(Json(json!({ "success": true }))),
    Err(err) => {
      let status = match err {
        SubmitError::MissingField(_) | SubmitError::InvalidEmail => StatusCode::BAD_REQUEST,
        SubmitError::AlreadyInFlight => StatusCode::CONFLICT,
        SubmitError::Transmission => StatusCode::BAD_GATEWAY,
      };
      Err(AppError::with_status(status, err))
    }
  }
}
