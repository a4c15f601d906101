//! `POST /register` — body: `{"username": "...", "password": "..."}`

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bytes::Bytes;
use jotter_core::{correction::TextCorrector, store::Store};

use crate::{
  AppState,
  error::ApiError,
  handlers::MessageResponse,
  pipeline::{self, Credentials},
};

pub async fn handler<S, C>(
  State(state): State<AppState<S, C>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: Store + 'static,
  C: TextCorrector + 'static,
{
  let credentials: Credentials = pipeline::decode(&body)?;
  pipeline::register(state.store.as_ref(), credentials).await?;
  Ok((
    StatusCode::CREATED,
    Json(MessageResponse { message: "User successfully registered" }),
  ))
}
