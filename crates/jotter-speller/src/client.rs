//! HTTP client for the Yandex.Speller oracle.

use std::time::Duration;

use jotter_core::correction::{CorrectionSpan, TextCorrector, apply_corrections};
use reqwest::Client;
use serde::Serialize;

use crate::{Error, Result, SpellerConfig, wire::decode_spans};

/// Form body of a `checkText` request.
#[derive(Serialize)]
struct CheckText<'a> {
  text:    &'a str,
  lang:    &'a str,
  options: u32,
  format:  &'static str,
}

/// [`TextCorrector`] backed by Yandex.Speller.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct YandexSpeller {
  client: Client,
  config: SpellerConfig,
}

impl YandexSpeller {
  pub fn new(config: SpellerConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()?;
    Ok(Self { client, config })
  }

  /// Ask the oracle for corrections to `text`.
  pub async fn check(&self, text: &str) -> Result<Vec<CorrectionSpan>> {
    let form = CheckText {
      text,
      lang: &self.config.lang,
      options: self.config.options,
      format: "plain",
    };

    let resp = self
      .client
      .post(&self.config.url)
      .form(&form)
      .send()
      .await
      .map_err(classify)?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status(status));
    }

    let body = resp.bytes().await.map_err(classify)?;
    let spans = decode_spans(&body)?;
    tracing::debug!(spans = spans.len(), "speller answered");
    Ok(spans)
  }
}

fn classify(err: reqwest::Error) -> Error {
  if err.is_timeout() { Error::Timeout } else { Error::Http(err) }
}

impl TextCorrector for YandexSpeller {
  async fn correct(&self, text: &str) -> jotter_core::Result<String> {
    if text.is_empty() {
      return Ok(String::new());
    }
    let spans = self.check(text).await?;
    apply_corrections(text, &spans)
  }
}
