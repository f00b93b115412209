use crate::encoding::Encoding;
use crate::error::LabelError;

// ── Macro for the alias table ─────────────────────────────────────────
//
// Each canonical encoding owns a list of accepted labels. The macro
// flattens them into one `(label, encoding)` slice so lookups stay a
// plain table scan and the grouping stays readable at the call site.

macro_rules! label_table {
  (
    $( $encoding:ident => [ $( $label:literal ),+ $(,)? ] ),+ $(,)?
  ) => {
    /// Every accepted label, already normalized, paired with the
    /// encoding it selects.
    pub const LABELS: &[(&str, Encoding)] = &[
      $( $( ($label, Encoding::$encoding), )+ )+
    ];
  };
}

label_table! {
  Utf8 => [
    "",
    "unicode-1-1-utf-8",
    "unicode11utf8",
    "unicode20utf8",
    "utf-8",
    "utf8",
    "x-unicode20utf8",
  ],
  Utf16Le => [
    "csunicode",
    "iso-10646-ucs-2",
    "ucs-2",
    "unicode",
    "unicodefeff",
    "utf-16",
    "utf-16le",
  ],
  Utf16Be => [
    "unicodefffe",
    "utf-16be",
  ],
}

/// Normalize a label: strip leading and trailing ASCII whitespace
/// (TAB, LF, FF, CR, SPACE) and lower-case ASCII letters.
///
/// Non-ASCII characters pass through untouched, so a label such as
/// `"UTF‑8"` with a non-breaking hyphen will not match.
#[must_use]
pub fn normalize(label: &str) -> String {
  label
    .trim_matches(|c: char| c.is_ascii_whitespace())
    .to_ascii_lowercase()
}

/// Resolve a label to its canonical encoding.
///
/// # Errors
///
/// Returns [`LabelError::Unsupported`] carrying the original label if
/// no alias matches after normalization.
pub fn lookup(label: &str) -> Result<Encoding, LabelError> {
  let normalized = normalize(label);
  LABELS
    .iter()
    .find(|(alias, _)| *alias == normalized)
    .map(|&(_, encoding)| encoding)
    .ok_or_else(|| LabelError::Unsupported {
      label: label.to_string(),
    })
}

/// Labels that select `encoding`, in table order.
pub fn aliases_of(encoding: Encoding) -> impl Iterator<Item = &'static str> {
  LABELS
    .iter()
    .filter(move |(_, e)| *e == encoding)
    .map(|&(alias, _)| alias)
}
