//! [`SqliteStore`] — the SQLite implementation of [`CredentialStore`] and
//! [`NoteStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use jotter_core::{
  account::{Account, AccountId},
  note::{Note, NoteId},
  store::{CredentialStore, NoteStore},
};

use crate::{
  Error, Result,
  encode::{RawNote, decode_uuid, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Account and note storage backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── CredentialStore impl ────────────────────────────────────────────────────

impl CredentialStore for SqliteStore {
  type Error = Error;

  async fn exists(&self, username: &str) -> Result<bool> {
    let username = username.to_owned();

    let exists: bool = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT EXISTS(SELECT 1 FROM accounts WHERE username = ?1)",
          rusqlite::params![username],
          |row| row.get(0),
        )?)
      })
      .await?;

    Ok(exists)
  }

  async fn create(&self, username: &str, password_hash: &str) -> Result<Account> {
    let account = Account {
      account_id:    AccountId::new(),
      username:      username.to_owned(),
      password_hash: password_hash.to_owned(),
      created_at:    Utc::now(),
    };

    let id_str = encode_uuid(account.account_id.0);
    let name   = account.username.clone();
    let hash   = account.password_hash.clone();
    let at_str = encode_dt(account.created_at);

    // The UNIQUE constraint makes check-and-insert a single atomic statement.
    let inserted = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "INSERT INTO accounts (account_id, username, password_hash, created_at)
           VALUES (?1, ?2, ?3, ?4)
           ON CONFLICT(username) DO NOTHING",
          rusqlite::params![id_str, name, hash, at_str],
        )?;
        Ok(changed == 1)
      })
      .await?;

    if !inserted {
      return Err(Error::DuplicateUsername(account.username));
    }

    tracing::debug!(account_id = %account.account_id, "account created");
    Ok(account)
  }

  async fn lookup_hash(&self, username: &str) -> Result<String> {
    let name = username.to_owned();

    let hash: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT password_hash FROM accounts WHERE username = ?1",
              rusqlite::params![name],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    hash.ok_or_else(|| Error::UserNotFound(username.to_owned()))
  }

  async fn lookup_id(&self, username: &str) -> Result<AccountId> {
    let name = username.to_owned();

    let id_str: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT account_id FROM accounts WHERE username = ?1",
              rusqlite::params![name],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    let id_str = id_str.ok_or_else(|| Error::UserNotFound(username.to_owned()))?;
    Ok(AccountId(decode_uuid(&id_str)?))
  }
}

// ─── NoteStore impl ──────────────────────────────────────────────────────────

impl NoteStore for SqliteStore {
  type Error = Error;

  async fn insert_note(&self, owner_id: AccountId, text: &str) -> Result<Note> {
    let note = Note {
      note_id:    NoteId::new(),
      owner_id,
      text:       text.to_owned(),
      created_at: Utc::now(),
    };

    let note_id_str  = encode_uuid(note.note_id.0);
    let owner_id_str = encode_uuid(owner_id.0);
    let text         = note.text.clone();
    let at_str       = encode_dt(note.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO notes (note_id, account_id, note_text, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![note_id_str, owner_id_str, text, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(note)
  }

  async fn list_notes(&self, owner_id: AccountId) -> Result<Vec<Note>> {
    let owner_id_str = encode_uuid(owner_id.0);

    let raws: Vec<RawNote> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT note_id, account_id, note_text, created_at
           FROM notes WHERE account_id = ?1 ORDER BY seq",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![owner_id_str], |row| {
            Ok(RawNote {
              note_id:    row.get(0)?,
              account_id: row.get(1)?,
              note_text:  row.get(2)?,
              created_at: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawNote::into_note).collect()
  }
}
