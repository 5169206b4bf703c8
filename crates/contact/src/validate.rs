use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Shape check only: `local@domain.tld`, no whitespace, exactly one `@`.
/// Says nothing about deliverability or domain existence.
#[must_use]
pub fn validate_email(email: &str) -> bool {
  EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_minimal_address() {
    assert!(validate_email("a@b.c"));
  }

  #[test]
  fn accepts_common_addresses() {
    assert!(validate_email("roksana.tech.2000@gmail.com"));
    assert!(validate_email("first+tag@sub.example.org"));
  }

  #[test]
  fn rejects_missing_at() {
    assert!(!validate_email("plainaddress"));
    assert!(!validate_email("user.example.com"));
  }

  #[test]
  fn rejects_missing_dot_after_at() {
    assert!(!validate_email("user@localhost"));
    assert!(!validate_email("user@com"));
  }

  #[test]
  fn rejects_whitespace_and_double_at() {
    assert!(!validate_email("user name@example.com"));
    assert!(!validate_email("user@@example.com"));
    assert!(!validate_email(" user@example.com"));
  }

  #[test]
  fn rejects_empty_parts() {
    assert!(!validate_email(""));
    assert!(!validate_email("@example.com"));
    assert!(!validate_email("user@.com"));
    assert!(!validate_email("user@example."));
  }
}
