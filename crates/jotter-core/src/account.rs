use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque account identifier, assigned by the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub Uuid);

impl AccountId {
  pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl Default for AccountId {
  fn default() -> Self { Self::new() }
}

impl fmt::Display for AccountId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A registered account. Created once, never mutated.
///
/// Not serialisable; the `Debug` output redacts the password digest.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
  pub account_id:    AccountId,
  pub username:      String,
  /// PHC string, e.g. `$argon2id$v=19$…`. Never re-derived after creation.
  pub password_hash: String,
  pub created_at:    DateTime<Utc>,
}

impl fmt::Debug for Account {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Account")
      .field("account_id", &self.account_id)
      .field("username", &self.username)
      .field("password_hash", &"<redacted>")
      .field("created_at", &self.created_at)
      .finish()
  }
}
