use serde::Deserialize;

/// The public Yandex.Speller JSON endpoint.
pub const DEFAULT_URL: &str =
  "https://speller.yandex.net/services/spellservice.json/checkText";

/// Connection settings for the spell-check oracle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
  pub url:          String,
  /// Comma-separated language list, e.g. `ru,en`.
  pub lang:         String,
  /// Yandex.Speller option bitmask (`IGNORE_DIGITS = 2`, `IGNORE_URLS = 4`, …).
  pub options:      u32,
  /// Upper bound on a single round-trip to the oracle.
  pub timeout_secs: u64,
}

impl Default for SpellerConfig {
  fn default() -> Self {
    Self {
      url:          DEFAULT_URL.to_string(),
      lang:         "ru,en".to_string(),
      options:      0,
      timeout_secs: 10,
    }
  }
}
