//! jotter-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) layered with
//! `JOTTER_*` environment variables, opens the SQLite store, connects the
//! spell-check client and serves the JSON API over HTTP.
//!
//! Top-level keys map to `JOTTER_<KEY>` (e.g. `JOTTER_PORT=9000`); nested keys
//! use a double underscore, e.g. `JOTTER_SPELLER__TIMEOUT_SECS=5`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use jotter_server::AppState;
use jotter_speller::YandexSpeller;
use jotter_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Jotter note service")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = jotter_server::load_config(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let speller = YandexSpeller::new(server_cfg.speller.clone())
    .context("failed to build speller client")?;
  tracing::info!(url = %server_cfg.speller.url, "using spell-check oracle");

  let state = AppState {
    store:     Arc::new(store),
    corrector: Arc::new(speller),
  };

  let app = jotter_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
