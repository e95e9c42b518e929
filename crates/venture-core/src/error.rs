//! Error types for `venture-core`.

use thiserror::Error;

/// Input validation failures raised by the `New*` constructors.
///
/// Lookup misses are not errors at this layer; store reads return
/// `Option` and callers decide how a missing row is reported.
#[derive(Debug, Error)]
pub enum Error {
  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  #[error("invalid email address: {0:?}")]
  InvalidEmail(String),

  #[error("password must be at least {0} characters")]
  PasswordTooShort(usize),

  #[error("budget must not be negative")]
  NegativeBudget,

  #[error("amount must not be negative")]
  NegativeAmount,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
