//! Yandex.Speller client for Jotter.
//!
//! [`YandexSpeller`] posts a note to the `checkText` endpoint, converts the
//! response into [`CorrectionSpan`](jotter_core::correction::CorrectionSpan)s
//! and applies them with
//! [`apply_corrections`](jotter_core::correction::apply_corrections).

mod client;
mod config;
pub mod error;
pub mod wire;

pub use client::YandexSpeller;
pub use config::SpellerConfig;
pub use error::{Error, Result};
