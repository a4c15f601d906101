//! Error type for `jotter-speller`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("speller request timed out")]
  Timeout,

  #[error("speller request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("speller returned status {0}")]
  Status(reqwest::StatusCode),

  #[error("could not decode speller response: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("invalid correction from speller: {0}")]
  InvalidSpan(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for jotter_core::Error {
  fn from(err: Error) -> Self { Self::CorrectionService(err.to_string()) }
}
