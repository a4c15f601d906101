//! Error taxonomy shared by every Jotter crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The request envelope could not be decoded or failed validation.
  #[error("bad request: {0}")]
  BadRequest(String),

  /// Unknown username or wrong password. The two are never distinguished.
  #[error("invalid credentials")]
  Unauthorized,

  /// Store-internal: no account with this username. Never surfaced as-is.
  #[error("user not found: {0}")]
  UserNotFound(String),

  #[error("username already taken: {0}")]
  DuplicateUsername(String),

  /// The spell-check oracle was unreachable, timed out, or answered with
  /// data that cannot be applied to the text.
  #[error("correction service error: {0}")]
  CorrectionService(String),

  #[error("password hashing failed: {0}")]
  Hashing(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
