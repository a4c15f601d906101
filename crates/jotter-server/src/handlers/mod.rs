pub mod notes;
pub mod register;

use serde::Serialize;

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
  pub message: &'static str,
}

/// `{"notes": ["...", ...]}`
#[derive(Debug, Serialize)]
pub struct NotesResponse {
  pub notes: Vec<String>,
}
