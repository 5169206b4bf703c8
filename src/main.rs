use portfolio_server::server;
use portfolio_shared::{AppEnv, AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();
  dotenvy::dotenv().ok();

  let env = AppEnv::from_env();
  if env.gateway_api_key.is_none() {
    tracing::warn!("AI_GATEWAY_API_KEY is not set, chat requests will fail");
  }

  server(&env).await
}
