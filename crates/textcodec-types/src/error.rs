use std::fmt;

/// Host-facing error category.
///
/// A host adapter maps each library error onto one of the two
/// exception kinds the decoder surface is allowed to raise.
///
/// ```text
/// ┌───────┬──────────────┬──────────────────────────────────────────┐
/// │ Kind  │ Host name    │ Raised by                                │
/// ├───────┼──────────────┼──────────────────────────────────────────┤
/// │ Range │ "RangeError" │ construction with an unknown label       │
/// │ Type  │ "TypeError"  │ decode() in fatal mode on malformed data │
/// └───────┴──────────────┴──────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  Range,
  Type,
}

impl ErrorKind {
  /// The exception name a scripting host would use.
  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Self::Range => "RangeError",
      Self::Type => "TypeError",
    }
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Errors raised while resolving an encoding label.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
  /// The label did not match any alias after normalization.
  ///
  /// `label` is the caller's original string, untrimmed, so the
  /// message shows exactly what was passed in.
  #[error("unsupported encoding: {label}")]
  Unsupported { label: String },
}

impl LabelError {
  #[must_use]
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Unsupported { .. } => ErrorKind::Range,
    }
  }
}
