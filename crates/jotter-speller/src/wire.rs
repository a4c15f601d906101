//! Wire types for the Yandex.Speller `checkText` JSON response.

use jotter_core::correction::CorrectionSpan;
use serde::Deserialize;

use crate::{Error, Result};

/// One entry of the `checkText` response array.
///
/// `pos` and `len` are counted in code points over the submitted text. `s`
/// holds candidate replacements, best first.
#[derive(Debug, Clone, Deserialize)]
pub struct WordCorrection {
  #[serde(default)]
  pub code: i32,
  pub pos:  i64,
  #[serde(default)]
  pub row:  i64,
  #[serde(default)]
  pub col:  i64,
  pub len:  i64,
  #[serde(default)]
  pub word: String,
  #[serde(default)]
  pub s:    Vec<String>,
}

impl WordCorrection {
  /// Convert into a [`CorrectionSpan`] using the best suggestion.
  ///
  /// Returns `Ok(None)` when there are no suggestions: such an entry leaves
  /// the text unchanged rather than deleting the word.
  pub fn into_span(self) -> Result<Option<CorrectionSpan>> {
    let position = usize::try_from(self.pos)
      .map_err(|_| Error::InvalidSpan(format!("negative position {}", self.pos)))?;
    let length = usize::try_from(self.len)
      .map_err(|_| Error::InvalidSpan(format!("negative length {}", self.len)))?;

    Ok(
      self
        .s
        .into_iter()
        .next()
        .map(|replacement| CorrectionSpan { position, length, replacement }),
    )
  }
}

/// Decode a raw `checkText` body into the spans that should be applied.
pub fn decode_spans(body: &[u8]) -> Result<Vec<CorrectionSpan>> {
  let corrections: Vec<WordCorrection> = serde_json::from_slice(body)?;
  let mut spans = Vec::with_capacity(corrections.len());
  for correction in corrections {
    if let Some(span) = correction.into_span()? {
      spans.push(span);
    }
  }
  Ok(spans)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_yandex_response() {
    let body = r#"[
      {"code":1,"pos":0,"row":0,"col":0,"len":5,"word":"ghdtn","s":["привет"]},
      {"code":1,"pos":6,"row":0,"col":6,"len":3,"word":"ult","s":["где","гдe"]}
    ]"#;
    let spans = decode_spans(body.as_bytes()).unwrap();
    assert_eq!(spans, vec![
      CorrectionSpan::new(0, 5, "привет"),
      CorrectionSpan::new(6, 3, "где"),
    ]);
  }

  #[test]
  fn empty_array_means_no_spans() {
    assert!(decode_spans(b"[]").unwrap().is_empty());
  }

  #[test]
  fn entry_without_suggestions_is_inert() {
    let body = r#"[{"code":3,"pos":0,"row":0,"col":0,"len":4,"word":"урас","s":[]}]"#;
    assert!(decode_spans(body.as_bytes()).unwrap().is_empty());
  }

  #[test]
  fn negative_offsets_are_rejected() {
    let body = r#"[{"pos":-1,"len":2,"s":["x"]}]"#;
    assert!(matches!(
      decode_spans(body.as_bytes()),
      Err(Error::InvalidSpan(_))
    ));

    let body = r#"[{"pos":1,"len":-2,"s":["x"]}]"#;
    assert!(matches!(
      decode_spans(body.as_bytes()),
      Err(Error::InvalidSpan(_))
    ));
  }

  #[test]
  fn unparsable_body_is_a_decode_error() {
    assert!(matches!(
      decode_spans(b"<html>502 Bad Gateway</html>"),
      Err(Error::Decode(_))
    ));
    assert!(matches!(
      decode_spans(br#"{"error":"quota"}"#),
      Err(Error::Decode(_))
    ));
  }
}
