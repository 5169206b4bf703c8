use std::env;

pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://ai.gateway.lovable.dev";
pub const DEFAULT_CHAT_MODEL: &str = "google/gemini-3-flash-preview";
pub const DEFAULT_CONTACT_ENDPOINT: &str =
  "https://ai-backend-portfolio-smyb.onrender.com/contact";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Process-wide configuration, read once in `main` and injected from there.
///
/// The gateway credential stays optional so a missing key surfaces as a 500
/// on the chat route instead of a startup panic.
pub struct AppEnv {
  pub gateway_api_key: Option<String>,
  pub gateway_base_url: String,
  pub chat_model: String,
  pub contact_endpoint: String,
  pub listen_addr: String,
}

impl AppEnv {
  #[must_use]
  pub fn from_env() -> Self {
    Self {
      gateway_api_key: env::var("AI_GATEWAY_API_KEY").ok(),
      gateway_base_url: env::var("AI_GATEWAY_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_GATEWAY_BASE_URL.to_string()),
      chat_model: env::var("AI_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
      contact_endpoint: env::var("CONTACT_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_CONTACT_ENDPOINT.to_string()),
      listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
    }
  }
}
