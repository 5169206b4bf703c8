use thiserror::Error;

use crate::relay::FALLBACK_EMAIL;

/// Why a contact submission did not go through.
///
/// Display strings are the exact user-facing notification texts; underlying
/// transport causes are logged, never surfaced here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
  /// A required field was empty after trimming. No network call was made.
  #[error("please fill in your {0}")]
  MissingField(&'static str),

  /// The email field does not look like `local@domain.tld`. No network call
  /// was made.
  #[error("please enter a valid email address")]
  InvalidEmail,

  /// A submission on this relay instance is still in flight.
  #[error("your message is still being sent, please wait a moment")]
  AlreadyInFlight,

  /// Network failure, non-JSON reply, or server-reported failure.
  #[error("failed to send your message, please email {FALLBACK_EMAIL} directly")]
  Transmission,
}

impl SubmitError {
  /// True for failures the sender can fix by correcting the form input.
  #[must_use]
  pub const fn is_validation(&self) -> bool {
    matches!(self, Self::MissingField(_) | Self::InvalidEmail)
  }
}
