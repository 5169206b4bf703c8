use std::sync::Arc;

use portfolio_contact::ContactRelay;
use portfolio_shared::AppEnv;

use crate::gateway::{AiGateway, ChatGateway};

#[derive(Clone)]
pub struct AppState {
  pub relay: Arc<ContactRelay>,
  /// `None` when no gateway credential is configured; chat requests then
  /// fail with a 500 before any upstream call.
  pub gateway: Option<Arc<dyn ChatGateway>>,
}

impl AppState {
  #[must_use]
  pub fn new(relay: Arc<ContactRelay>, gateway: Option<Arc<dyn ChatGateway>>) -> Self {
    Self { relay, gateway }
  }

  /// Wire the real transports from configuration.
  #[must_use]
  pub fn from_env(env: &AppEnv) -> Self {
    let relay = Arc::new(ContactRelay::new(env.contact_endpoint.clone()));
    let gateway = env.gateway_api_key.as_ref().map(|key| {
      Arc::new(AiGateway::new(
        key.clone(),
        env.chat_model.clone(),
        env.gateway_base_url.clone(),
      )) as Arc<dyn ChatGateway>
    });
    Self { relay, gateway }
  }
}
