//! Error type for `jotter-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("user not found: {0}")]
  UserNotFound(String),

  #[error("username already taken: {0}")]
  DuplicateUsername(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for jotter_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::UserNotFound(username) => Self::UserNotFound(username),
      Error::DuplicateUsername(username) => Self::DuplicateUsername(username),
      other => Self::Store(Box::new(other)),
    }
  }
}
