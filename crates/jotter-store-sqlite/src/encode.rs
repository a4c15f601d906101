//! Conversions between domain types and the plain-text SQLite columns.
//!
//! Timestamps are RFC 3339 strings; UUIDs are hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use jotter_core::{
  account::AccountId,
  note::{Note, NoteId},
};
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// A `notes` row before decoding.
pub struct RawNote {
  pub note_id:    String,
  pub account_id: String,
  pub note_text:  String,
  pub created_at: String,
}

impl RawNote {
  pub fn into_note(self) -> Result<Note> {
    Ok(Note {
      note_id:    NoteId(decode_uuid(&self.note_id)?),
      owner_id:   AccountId(decode_uuid(&self.account_id)?),
      text:       self.note_text,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
