//! The request pipeline behind every endpoint.
//!
//! Write path: decode → size check → authenticate → correct → persist. Read path: decode →
//! authenticate → list. Each stage either hands its output to the next or
//! rejects the request; persistence is always the last step, so a request
//! that fails (or is dropped) before it never leaves a partial note behind.

use jotter_core::{
  Error, Result,
  account::Account,
  correction::TextCorrector,
  note::Note,
  store::{CredentialStore, Store},
};
use serde::{Deserialize, de::DeserializeOwned};

use crate::auth::{authenticate, hash_password_blocking};

/// Longest note, in code points, accepted for spell-checking. The oracle
/// refuses longer texts.
pub const MAX_NOTE_CHARS: usize = 10_000;

// ─── Envelopes ───────────────────────────────────────────────────────────────

/// `{"username": "...", "password": "..."}` — the register and fetch bodies.
#[derive(Debug, Deserialize)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// `{"username": "...", "password": "...", "note": "..."}`
#[derive(Debug, Deserialize)]
pub struct PushNoteRequest {
  #[serde(flatten)]
  pub credentials: Credentials,
  pub note:        String,
}

/// Decode a JSON request body. Anything malformed is a bad request.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
  serde_json::from_slice(body).map_err(|e| Error::BadRequest(e.to_string()))
}

// ─── Stages ──────────────────────────────────────────────────────────────────

/// Create an account for `credentials`.
pub async fn register<S>(store: &S, credentials: Credentials) -> Result<Account>
where
  S: CredentialStore,
{
  let Credentials { username, password } = credentials;
  if username.trim().is_empty() {
    return Err(Error::BadRequest("username must not be empty".into()));
  }
  if password.is_empty() {
    return Err(Error::BadRequest("password must not be empty".into()));
  }

  // Skip the hash for an obvious duplicate; `create` still decides atomically.
  if store.exists(&username).await.map_err(Into::<Error>::into)? {
    return Err(Error::DuplicateUsername(username));
  }

  let digest = hash_password_blocking(password).await?;
  let account = store
    .create(&username, &digest)
    .await
    .map_err(Into::<Error>::into)?;

  tracing::info!(account_id = %account.account_id, %username, "registered");
  Ok(account)
}

/// Authenticate, spell-check and store a note. Returns the stored note.
pub async fn push_note<S, C>(store: &S, corrector: &C, request: PushNoteRequest) -> Result<Note>
where
  S: Store,
  C: TextCorrector,
{
  let PushNoteRequest { credentials, note } = request;
  if note.chars().count() > MAX_NOTE_CHARS {
    return Err(Error::BadRequest(format!(
      "note exceeds {MAX_NOTE_CHARS} characters"
    )));
  }

  let owner_id =
    authenticate(store, &credentials.username, &credentials.password).await?;
  tracing::debug!(%owner_id, "authenticated");

  let corrected = corrector.correct(&note).await?;
  tracing::debug!(%owner_id, changed = corrected != note, "corrected");

  let stored = store
    .insert_note(owner_id, &corrected)
    .await
    .map_err(Into::<Error>::into)?;
  tracing::info!(%owner_id, note_id = %stored.note_id, "note stored");
  Ok(stored)
}

/// Authenticate and list the caller's notes in store order.
pub async fn fetch_notes<S>(store: &S, credentials: Credentials) -> Result<Vec<Note>>
where
  S: Store,
{
  let owner_id =
    authenticate(store, &credentials.username, &credentials.password).await?;

  let notes = store
    .list_notes(owner_id)
    .await
    .map_err(Into::<Error>::into)?;
  tracing::debug!(%owner_id, count = notes.len(), "notes fetched");
  Ok(notes)
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use jotter_core::correction::{CorrectionSpan, apply_corrections};
  use jotter_store_sqlite::SqliteStore;

  use super::*;

  /// Oracle that corrects "ghdtn" to "привет" and counts its calls.
  #[derive(Default)]
  struct FakeOracle {
    calls: AtomicUsize,
  }

  impl TextCorrector for FakeOracle {
    async fn correct(&self, text: &str) -> Result<String> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      let spans = match text {
        "ghdtn" => vec![CorrectionSpan::new(0, 5, "привет")],
        _ => vec![],
      };
      apply_corrections(text, &spans)
    }
  }

  struct DownOracle;

  impl TextCorrector for DownOracle {
    async fn correct(&self, _: &str) -> Result<String> {
      Err(Error::CorrectionService("connection refused".into()))
    }
  }

  fn creds(username: &str, password: &str) -> Credentials {
    Credentials { username: username.into(), password: password.into() }
  }

  fn push(username: &str, password: &str, note: &str) -> PushNoteRequest {
    PushNoteRequest { credentials: creds(username, password), note: note.into() }
  }

  async fn store_with_alice() -> SqliteStore {
    let store = SqliteStore::open_in_memory().await.unwrap();
    register(&store, creds("alice", "secret")).await.unwrap();
    store
  }

  #[test]
  fn decode_accepts_flat_push_body() {
    let req: PushNoteRequest =
      decode(br#"{"username":"alice","password":"secret","note":"hi"}"#).unwrap();
    assert_eq!(req.credentials.username, "alice");
    assert_eq!(req.note, "hi");
  }

  #[test]
  fn decode_rejects_malformed_bodies() {
    let bodies: [&[u8]; 4] = [b"not json", br#"{"username":"alice"}"#, b"[]", b""];
    for body in bodies {
      assert!(matches!(
        decode::<PushNoteRequest>(body),
        Err(Error::BadRequest(_))
      ));
    }
  }

  #[tokio::test]
  async fn register_twice_is_a_duplicate() {
    let store = store_with_alice().await;
    let err = register(&store, creds("alice", "other")).await.unwrap_err();
    assert!(matches!(err, Error::DuplicateUsername(name) if name == "alice"));
  }

  #[tokio::test]
  async fn register_rejects_empty_fields() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    assert!(matches!(
      register(&store, creds("  ", "secret")).await,
      Err(Error::BadRequest(_))
    ));
    assert!(matches!(
      register(&store, creds("alice", "")).await,
      Err(Error::BadRequest(_))
    ));
  }

  #[tokio::test]
  async fn pushed_note_is_corrected_before_storage() {
    let store = store_with_alice().await;
    let oracle = FakeOracle::default();

    let note = push_note(&store, &oracle, push("alice", "secret", "ghdtn"))
      .await
      .unwrap();
    assert_eq!(note.text, "привет");

    let notes = fetch_notes(&store, creds("alice", "secret")).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].text, "привет");
  }

  #[tokio::test]
  async fn empty_note_is_stored_as_empty() {
    let store = store_with_alice().await;
    let note = push_note(&store, &FakeOracle::default(), push("alice", "secret", ""))
      .await
      .unwrap();
    assert_eq!(note.text, "");
  }

  #[tokio::test]
  async fn overlong_note_is_rejected_before_the_oracle() {
    let store = store_with_alice().await;
    let oracle = FakeOracle::default();

    let long = "я".repeat(MAX_NOTE_CHARS + 1);
    let err = push_note(&store, &oracle, push("alice", "secret", &long))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);

    let notes = fetch_notes(&store, creds("alice", "secret")).await.unwrap();
    assert!(notes.is_empty());
  }

  #[tokio::test]
  async fn note_at_the_limit_is_accepted() {
    let store = store_with_alice().await;
    let oracle = FakeOracle::default();

    // Counted in code points: 10 000 Cyrillic letters are 20 000 bytes.
    let full = "я".repeat(MAX_NOTE_CHARS);
    let note = push_note(&store, &oracle, push("alice", "secret", &full))
      .await
      .unwrap();
    assert_eq!(note.text, full);
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn bad_credentials_stop_before_correction() {
    let store = store_with_alice().await;
    let oracle = FakeOracle::default();

    for (user, pass) in [("alice", "wrong"), ("nobody", "secret")] {
      let err = push_note(&store, &oracle, push(user, pass, "ghdtn"))
        .await
        .unwrap_err();
      assert!(matches!(err, Error::Unauthorized));
    }
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn oracle_failure_persists_nothing() {
    let store = store_with_alice().await;

    let err = push_note(&store, &DownOracle, push("alice", "secret", "ghdtn"))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::CorrectionService(_)));

    let notes = fetch_notes(&store, creds("alice", "secret")).await.unwrap();
    assert!(notes.is_empty());
  }

  #[tokio::test]
  async fn fetch_requires_valid_credentials() {
    let store = store_with_alice().await;
    assert!(matches!(
      fetch_notes(&store, creds("alice", "nope")).await,
      Err(Error::Unauthorized)
    ));
  }
}
