use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use portfolio_shared::ChatMessage;

mod ai_gateway;
pub use ai_gateway::{AiGateway, PERSONA_CONTEXT};

/// Relayed SSE bytes, chunked however the upstream chunked them.
pub type ByteStream = BoxStream<'static, Result<Bytes, Box<dyn std::error::Error + Send + Sync>>>;

/// What came back from the completion gateway.
pub enum CompletionOutcome {
  /// 2xx upstream; the body stream is relayed to the caller untouched.
  Stream(ByteStream),
  /// Upstream 429.
  RateLimited,
  /// Upstream 402.
  PaymentRequired,
  /// Any other non-2xx status, with the reply body kept for the log.
  Failed { status: u16, body: String },
}

/// Port to the hosted completion API.
///
/// Object-safe so handlers stay decoupled from the transport and tests can
/// count calls or feed canned streams.
#[async_trait]
pub trait ChatGateway: Send + Sync {
  /// Forward one conversation, persona prompt prepended, with streaming
  /// enabled upstream.
  async fn stream_completion(
    &self,
    messages: Vec<ChatMessage>,
  ) -> anyhow::Result<CompletionOutcome>;
}
