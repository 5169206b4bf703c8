use axum::{Router, response::Html, routing::get};
use portfolio_shared::{AppEnv, AppError};
use tokio::net::TcpListener;
use tokio::signal;

use crate::api;
use crate::utils::AppState;

#[axum::debug_handler]
async fn handler() -> Html<&'static str> {
  Html("<h1>Portfolio Relay</h1>")
}

pub async fn server(env: &AppEnv) -> Result<(), AppError> {
  let app_state = AppState::from_env(env);

  let app = Router::new()
    .route("/", get(handler))
    .merge(api::app())
    .with_state(app_state);

  let listener = TcpListener::bind(&env.listen_addr).await?;

  tracing::info!("server started at http://{}", env.listen_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

/// Resolves on Ctrl+C or SIGTERM so in-flight relays can drain.
///
/// # Panics
///
/// Panics if a signal handler cannot be installed.
async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c()
      .await
      .expect("failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
}
