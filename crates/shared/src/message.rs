use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
  System,
  User,
  Assistant,
}

/// One turn of a conversation, in the wire shape the completion gateway
/// expects.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ChatMessage {
  pub role: ChatRole,
  pub content: String,
}

/// A contact-form submission. Ephemeral: validated, relayed once, discarded.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ContactMessage {
  pub name: String,
  pub email: String,
  pub subject: String,
  pub message: String,
}
