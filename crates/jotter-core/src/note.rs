use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::AccountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
  pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl Default for NoteId {
  fn default() -> Self { Self::new() }
}

impl fmt::Display for NoteId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A stored note. `text` is the post-correction text and is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  pub note_id:    NoteId,
  /// The account this note belongs to; fixed at write time.
  pub owner_id:   AccountId,
  pub text:       String,
  pub created_at: DateTime<Utc>,
}
