use axum::{
  Json, Router,
  http::{HeaderValue, header},
  routing::{get, post},
};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod contact;
mod portfolio_chat;

pub use portfolio_chat::{ChatRequest, PAYMENT_MESSAGE, RATE_LIMIT_MESSAGE};

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Portfolio Relay API",
    version = "0.1.0",
    description = "Contact relay and streaming chat proxy for the portfolio site"
  ),
  paths(contact::contact, portfolio_chat::portfolio_chat),
  components(schemas(
    ChatRequest,
    portfolio_shared::ChatMessage,
    portfolio_shared::ChatRole,
    portfolio_shared::ContactMessage,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route(
      "/portfolio-chat",
      post(portfolio_chat::portfolio_chat).options(portfolio_chat::preflight),
    )
    .route(
      "/contact",
      post(contact::contact).options(portfolio_chat::preflight),
    )
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
    // Browser widgets call these routes cross-origin, so both headers go on
    // every response, error paths included.
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_ORIGIN,
      HeaderValue::from_static("*"),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_HEADERS,
      HeaderValue::from_static(ALLOWED_HEADERS),
    ))
}
