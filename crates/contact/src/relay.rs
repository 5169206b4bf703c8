use std::sync::atomic::{AtomicBool, Ordering};

use portfolio_shared::ContactMessage;
use serde::Deserialize;

use crate::{SubmitError, validate_email};

/// Where to direct senders when the relay itself cannot deliver.
pub const FALLBACK_EMAIL: &str = "roksana.tech.2000@gmail.com";

#[derive(Deserialize)]
struct BackendReply {
  success: Option<bool>,
}

/// Client for the external contact backend.
///
/// One POST per submission, no retry. A submission in flight blocks further
/// submits on the same instance until it settles, so repeated clicks cannot
/// produce duplicate sends.
pub struct ContactRelay {
  client: reqwest::Client,
  endpoint: String,
  in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path, including cancellation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
  fn drop(&mut self) {
    self.0.store(false, Ordering::Release);
  }
}

impl ContactRelay {
  #[must_use]
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      endpoint: endpoint.into(),
      in_flight: AtomicBool::new(false),
    }
  }

  /// Validate and deliver one contact message.
  ///
  /// Validation runs before any network I/O; a failed precondition means no
  /// request was sent at all.
  pub async fn submit(&self, msg: &ContactMessage) -> Result<(), SubmitError> {
    let msg = trimmed(msg);
    validate(&msg)?;

    if self.in_flight.swap(true, Ordering::AcqRel) {
      return Err(SubmitError::AlreadyInFlight);
    }
    let _guard = InFlightGuard(&self.in_flight);

    self.send(&msg).await
  }

  async fn send(&self, msg: &ContactMessage) -> Result<(), SubmitError> {
    let response = match self.client.post(&self.endpoint).json(msg).send().await {
      Ok(response) => response,
      Err(err) => {
        tracing::error!("contact submission failed: {err}");
        return Err(SubmitError::Transmission);
      }
    };

    let status = response.status();
    let reply: BackendReply = match response.json().await {
      Ok(reply) => reply,
      Err(err) => {
        tracing::error!(%status, "contact backend sent a non-JSON reply: {err}");
        return Err(SubmitError::Transmission);
      }
    };

    // An explicit `success` field is authoritative; the HTTP status is only
    // a fallback when the field is absent.
    if reply.success.unwrap_or(status.is_success()) {
      Ok(())
    } else {
      tracing::error!(%status, "contact backend reported failure");
      Err(SubmitError::Transmission)
    }
  }
}

fn trimmed(msg: &ContactMessage) -> ContactMessage {
  ContactMessage {
    name: msg.name.trim().to_owned(),
    email: msg.email.trim().to_owned(),
    subject: msg.subject.trim().to_owned(),
    message: msg.message.trim().to_owned(),
  }
}

fn validate(msg: &ContactMessage) -> Result<(), SubmitError> {
  let fields = [
    ("name", &msg.name),
    ("email", &msg.email),
    ("subject", &msg.subject),
    ("message", &msg.message),
  ];
  for (field, value) in fields {
    if value.is_empty() {
      return Err(SubmitError::MissingField(field));
    }
  }
  if !validate_email(&msg.email) {
    return Err(SubmitError::InvalidEmail);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::sync::atomic::AtomicUsize;
  use std::time::Duration;

  use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
  use tokio::net::TcpListener;

  use super::*;

  #[derive(Clone)]
  struct MockBackend {
    status: StatusCode,
    body: String,
    delay: Duration,
    hits: Arc<AtomicUsize>,
  }

  async fn reply(State(backend): State<MockBackend>) -> impl IntoResponse {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(backend.delay).await;
    (backend.status, backend.body)
  }

  async fn spawn_backend(status: StatusCode, body: &str, delay: Duration) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let backend = MockBackend {
      status,
      body: body.to_owned(),
      delay,
      hits: hits.clone(),
    };
    let app = Router::new()
      .route("/contact", post(reply))
      .with_state(backend);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/contact"), hits)
  }

  fn filled() -> ContactMessage {
    ContactMessage {
      name: "Ada".into(),
      email: "ada@example.com".into(),
      subject: "Hello".into(),
      message: "Nice portfolio!".into(),
    }
  }

  #[tokio::test]
  async fn delivers_when_backend_reports_success() {
    let (endpoint, hits) =
      spawn_backend(StatusCode::OK, r#"{"success": true}"#, Duration::ZERO).await;
    let relay = ContactRelay::new(endpoint);

    assert_eq!(relay.submit(&filled()).await, Ok(()));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn explicit_failure_field_wins_over_http_status() {
    let (endpoint, _hits) =
      spawn_backend(StatusCode::OK, r#"{"success": false}"#, Duration::ZERO).await;
    let relay = ContactRelay::new(endpoint);

    assert_eq!(relay.submit(&filled()).await, Err(SubmitError::Transmission));
  }

  #[tokio::test]
  async fn http_status_decides_when_field_is_absent() {
    let (ok_endpoint, _) = spawn_backend(StatusCode::OK, "{}", Duration::ZERO).await;
    assert_eq!(ContactRelay::new(ok_endpoint).submit(&filled()).await, Ok(()));

    let (err_endpoint, _) =
      spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, "{}", Duration::ZERO).await;
    assert_eq!(
      ContactRelay::new(err_endpoint).submit(&filled()).await,
      Err(SubmitError::Transmission)
    );
  }

  #[tokio::test]
  async fn non_json_reply_is_a_transmission_failure() {
    let (endpoint, _) =
      spawn_backend(StatusCode::OK, "Internal Server Error", Duration::ZERO).await;
    let relay = ContactRelay::new(endpoint);

    assert_eq!(relay.submit(&filled()).await, Err(SubmitError::Transmission));
  }

  #[tokio::test]
  async fn empty_field_short_circuits_without_network() {
    let (endpoint, hits) =
      spawn_backend(StatusCode::OK, r#"{"success": true}"#, Duration::ZERO).await;
    let relay = ContactRelay::new(endpoint);

    let mut msg = filled();
    msg.subject = "   ".into();

    assert_eq!(
      relay.submit(&msg).await,
      Err(SubmitError::MissingField("subject"))
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn malformed_email_short_circuits_without_network() {
    let (endpoint, hits) =
      spawn_backend(StatusCode::OK, r#"{"success": true}"#, Duration::ZERO).await;
    let relay = ContactRelay::new(endpoint);

    let mut msg = filled();
    msg.email = "not-an-email".into();

    assert_eq!(relay.submit(&msg).await, Err(SubmitError::InvalidEmail));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn unreachable_backend_is_a_transmission_failure() {
    // Bind then drop so the port is very likely closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let relay = ContactRelay::new(format!("http://{addr}/contact"));
    assert_eq!(relay.submit(&filled()).await, Err(SubmitError::Transmission));
  }

  #[tokio::test]
  async fn resubmit_while_in_flight_is_rejected() {
    let (endpoint, hits) = spawn_backend(
      StatusCode::OK,
      r#"{"success": true}"#,
      Duration::from_millis(300),
    )
    .await;
    let relay = Arc::new(ContactRelay::new(endpoint));

    let first = {
      let relay = relay.clone();
      tokio::spawn(async move { relay.submit(&filled()).await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(
      relay.submit(&filled()).await,
      Err(SubmitError::AlreadyInFlight)
    );
    assert_eq!(first.await.unwrap(), Ok(()));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // Settled, so the next submission goes through again.
    assert_eq!(relay.submit(&filled()).await, Ok(()));
  }
}
