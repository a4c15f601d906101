//! HTTP front end for Jotter.
//!
//! Exposes an axum [`Router`] with three JSON endpoints (`/register`,
//! `/push_note`, `/get_notes`) backed by any [`Store`] and any
//! [`TextCorrector`]. Both are injected through [`AppState`].

pub mod auth;
pub mod error;
pub mod handlers;
pub mod pipeline;

pub use error::ApiError;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use jotter_core::{correction::TextCorrector, store::Store};
use jotter_speller::SpellerConfig;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Upper bound on a request body. Comfortably holds a note of
/// [`pipeline::MAX_NOTE_CHARS`] four-byte characters plus credentials.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `JOTTER_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  pub speller:    SpellerConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "0.0.0.0".to_string(),
      port:       8080,
      store_path: PathBuf::from("jotter.db"),
      speller:    SpellerConfig::default(),
    }
  }
}

/// Load [`ServerConfig`] from the TOML file at `path` (optional) layered with
/// `JOTTER_*` environment variables.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  load_config_with_env(path, None)
}

/// `env` replaces the process environment when given.
fn load_config_with_env(
  path: &Path,
  env:  Option<config::Map<String, String>>,
) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(
      config::Environment::with_prefix("JOTTER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(env),
    )
    .build()?
    .try_deserialize()
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, C> {
  pub store:     Arc<S>,
  pub corrector: Arc<C>,
}

impl<S, C> Clone for AppState<S, C> {
  fn clone(&self) -> Self {
    Self {
      store:     Arc::clone(&self.store),
      corrector: Arc::clone(&self.corrector),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the note service.
pub fn router<S, C>(state: AppState<S, C>) -> Router
where
  S: Store + 'static,
  C: TextCorrector + 'static,
{
  Router::new()
    .route("/register",  post(handlers::register::handler::<S, C>))
    .route("/push_note", post(handlers::notes::push::<S, C>))
    .route("/get_notes", post(handlers::notes::list::<S, C>))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
