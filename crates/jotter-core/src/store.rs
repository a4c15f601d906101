//! The `CredentialStore` and `NoteStore` traits.
//!
//! Implemented by storage backends (e.g. `jotter-store-sqlite`). The request
//! pipeline in `jotter-server` depends on these abstractions, never on a
//! concrete backend, so tests can run against an in-memory store.
//!
//! Backend errors must convert into [`crate::Error`]: a backend reports
//! "no such user" as [`crate::Error::UserNotFound`] and a uniqueness conflict
//! as [`crate::Error::DuplicateUsername`]; everything else becomes
//! [`crate::Error::Store`].

use std::future::Future;

use crate::{
  account::{Account, AccountId},
  note::Note,
};

// ─── Credentials ─────────────────────────────────────────────────────────────

/// Persists username → password digest.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait CredentialStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static + Into<crate::Error>;

  /// Whether an account with `username` exists.
  fn exists<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Create an account. The uniqueness check and the insert are a single
  /// atomic step; a taken username yields a duplicate-username error.
  fn create<'a>(
    &'a self,
    username: &'a str,
    password_hash: &'a str,
  ) -> impl Future<Output = Result<Account, Self::Error>> + Send + 'a;

  /// Stored password digest for `username`.
  fn lookup_hash<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a;

  /// Account id for `username`.
  fn lookup_id<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<AccountId, Self::Error>> + Send + 'a;
}

// ─── Notes ───────────────────────────────────────────────────────────────────

/// Persists (owner, text) pairs. Notes are append-only.
pub trait NoteStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static + Into<crate::Error>;

  /// Persist a note for `owner_id` and return it with its store-assigned id.
  fn insert_note<'a>(
    &'a self,
    owner_id: AccountId,
    text: &'a str,
  ) -> impl Future<Output = Result<Note, Self::Error>> + Send + 'a;

  /// All notes owned by `owner_id`, in the store's natural order.
  fn list_notes(
    &self,
    owner_id: AccountId,
  ) -> impl Future<Output = Result<Vec<Note>, Self::Error>> + Send + '_;
}

// ─── Combined ────────────────────────────────────────────────────────────────

/// A backend that stores both accounts and notes.
pub trait Store: CredentialStore + NoteStore {}

impl<T: CredentialStore + NoteStore> Store for T {}
