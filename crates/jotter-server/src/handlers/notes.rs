//! Note endpoints.
//!
//! | Method | Path         | Body                                  |
//! |--------|--------------|---------------------------------------|
//! | `POST` | `/push_note` | `{"username", "password", "note"}`    |
//! | `POST` | `/get_notes` | `{"username", "password"}`            |

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bytes::Bytes;
use jotter_core::{correction::TextCorrector, store::Store};

use crate::{
  AppState,
  error::ApiError,
  handlers::{MessageResponse, NotesResponse},
  pipeline::{self, Credentials, PushNoteRequest},
};

/// `POST /push_note`
pub async fn push<S, C>(
  State(state): State<AppState<S, C>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: Store + 'static,
  C: TextCorrector + 'static,
{
  let request: PushNoteRequest = pipeline::decode(&body)?;
  pipeline::push_note(state.store.as_ref(), state.corrector.as_ref(), request).await?;
  Ok((
    StatusCode::CREATED,
    Json(MessageResponse { message: "Note successfully created" }),
  ))
}

/// `POST /get_notes`
pub async fn list<S, C>(
  State(state): State<AppState<S, C>>,
  body: Bytes,
) -> Result<Json<NotesResponse>, ApiError>
where
  S: Store + 'static,
  C: TextCorrector + 'static,
{
  let credentials: Credentials = pipeline::decode(&body)?;
  let notes = pipeline::fetch_notes(state.store.as_ref(), credentials).await?;
  Ok(Json(NotesResponse {
    notes: notes.into_iter().map(|note| note.text).collect(),
  }))
}
