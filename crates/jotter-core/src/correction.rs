//! Correction spans and the reconstruction algorithm.
//!
//! A spell-check oracle reports a list of [`CorrectionSpan`]s over the input
//! text. Offsets and lengths are counted in Unicode code points (Rust
//! `char`s), not bytes. [`apply_corrections`] merges the unchanged segments of
//! the input with the replacements in a single pass.

use std::future::Future;

use crate::{Error, Result};

/// A single replacement instruction over a code-point range of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionSpan {
  /// Zero-based code-point index into the original text.
  pub position:    usize,
  /// Number of code points replaced. Zero means pure insertion.
  pub length:      usize,
  pub replacement: String,
}

impl CorrectionSpan {
  pub fn new(position: usize, length: usize, replacement: impl Into<String>) -> Self {
    Self { position, length, replacement: replacement.into() }
  }

  /// Code-point index one past the replaced range, if it does not overflow.
  fn end(&self) -> Option<usize> { self.position.checked_add(self.length) }
}

/// Produces a corrected version of a note's text.
///
/// Implementations call out to an external oracle; tests substitute a
/// deterministic fake. Failure is all-or-nothing: an implementation must never
/// fall back to returning the uncorrected text.
pub trait TextCorrector: Send + Sync {
  fn correct<'a>(
    &'a self,
    text: &'a str,
  ) -> impl Future<Output = Result<String>> + Send + 'a;
}

/// Apply `spans` to `text`.
///
/// Spans must be in ascending `position` order, must not overlap, and must lie
/// within the text. Any violation is rejected with
/// [`Error::CorrectionService`] rather than producing garbled output.
pub fn apply_corrections(text: &str, spans: &[CorrectionSpan]) -> Result<String> {
  if spans.is_empty() {
    return Ok(text.to_owned());
  }

  // Byte offset of every code-point boundary, including the end of the text.
  let boundaries: Vec<usize> = text
    .char_indices()
    .map(|(i, _)| i)
    .chain(std::iter::once(text.len()))
    .collect();
  let char_len = boundaries.len() - 1;

  let mut out = String::with_capacity(text.len());
  let mut cur = 0;

  for (index, span) in spans.iter().enumerate() {
    if span.position < cur {
      return Err(Error::CorrectionService(format!(
        "span {index} at position {} overlaps or precedes the previous span ending at {cur}",
        span.position
      )));
    }
    let end = span
      .end()
      .filter(|&end| end <= char_len)
      .ok_or_else(|| {
        Error::CorrectionService(format!(
          "span {index} ({}+{}) is out of range for text of {char_len} characters",
          span.position, span.length
        ))
      })?;

    out.push_str(&text[boundaries[cur]..boundaries[span.position]]);
    out.push_str(&span.replacement);
    cur = end;
  }

  out.push_str(&text[boundaries[cur]..]);
  Ok(out)
}
