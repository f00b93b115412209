use std::fmt;
use std::str::FromStr;

use textcodec_wire::{bom, utf16, utf8, BomMatch, ByteOrder, Sequence};

use crate::error::LabelError;
use crate::labels;

/// The canonical encodings a decoder can be built for.
///
/// ```text
/// ┌──────────┬────────────┬──────────┬──────────┬──────────────┐
/// │ Variant  │ Name       │ Width    │ Order    │ BOM(s)       │
/// ├──────────┼────────────┼──────────┼──────────┼──────────────┤
/// │ Utf8     │ utf-8      │ Variable │ —        │ EF BB BF     │
/// │ Utf16Le  │ utf-16le   │ Fixed    │ Little   │ FF FE, FE FF │
/// │ Utf16Be  │ utf-16be   │ Fixed    │ Big      │ FF FE, FE FF │
/// └──────────┴────────────┴──────────┴──────────┴──────────────┘
/// ```
///
/// A 16-bit stream strips either mark, but its byte order always
/// comes from the label that selected it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
  Utf8,
  Utf16Le,
  Utf16Be,
}

/// Whether code units have a fixed size on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
  /// One to four bytes per code point (UTF-8).
  Variable,
  /// Two-byte code units, paired for supplementary code points (UTF-16).
  Fixed,
}

impl Encoding {
  pub const ALL: [Self; 3] = [Self::Utf8, Self::Utf16Le, Self::Utf16Be];

  /// Resolve a caller-supplied label.
  ///
  /// # Errors
  ///
  /// Returns [`LabelError::Unsupported`] for unknown labels.
  pub fn for_label(label: &str) -> Result<Self, LabelError> {
    labels::lookup(label)
  }

  /// Canonical lower-case name, as echoed back to callers.
  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Self::Utf8 => "utf-8",
      Self::Utf16Le => "utf-16le",
      Self::Utf16Be => "utf-16be",
    }
  }

  #[must_use]
  pub fn width(self) -> Width {
    match self {
      Self::Utf8 => Width::Variable,
      Self::Utf16Le | Self::Utf16Be => Width::Fixed,
    }
  }

  /// Byte order of the 16-bit forms; `None` for UTF-8.
  #[must_use]
  pub fn byte_order(self) -> Option<ByteOrder> {
    match self {
      Self::Utf8 => None,
      Self::Utf16Le => Some(ByteOrder::Little),
      Self::Utf16Be => Some(ByteOrder::Big),
    }
  }

  /// Longest well-formed sequence in bytes.
  #[must_use]
  pub fn max_sequence_len(self) -> usize {
    match self {
      Self::Utf8 => utf8::MAX_SEQUENCE_LEN,
      Self::Utf16Le | Self::Utf16Be => utf16::MAX_SEQUENCE_LEN,
    }
  }

  /// Most bytes a decoder may carry between two streaming calls.
  #[must_use]
  pub fn max_pending_len(self) -> usize {
    self.max_sequence_len() - 1
  }

  /// Classify the sequence at the front of `buf` under this encoding.
  #[must_use]
  pub fn classify(self, buf: &[u8]) -> Sequence {
    match self.byte_order() {
      None => utf8::classify(buf),
      Some(order) => utf16::classify(buf, order),
    }
  }

  /// Match the byte order mark(s) this encoding strips.
  #[must_use]
  pub fn match_bom(self, buf: &[u8]) -> BomMatch {
    match self {
      Self::Utf8 => bom::match_utf8(buf),
      Self::Utf16Le | Self::Utf16Be => bom::match_utf16(buf),
    }
  }

  /// Labels that select this encoding.
  pub fn labels(self) -> impl Iterator<Item = &'static str> {
    labels::aliases_of(self)
  }
}

impl fmt::Display for Encoding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Encoding {
  type Err = LabelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::for_label(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_and_display_agree() {
    for encoding in Encoding::ALL {
      assert_eq!(encoding.to_string(), encoding.name());
    }
  }

  #[test]
  fn parse_via_from_str() {
    assert_eq!("UTF8".parse::<Encoding>(), Ok(Encoding::Utf8));
    assert_eq!(" utf-16 ".parse::<Encoding>(), Ok(Encoding::Utf16Le));
    assert!("koi8-r".parse::<Encoding>().is_err());
  }

  #[test]
  fn width_classification() {
    assert_eq!(Encoding::Utf8.width(), Width::Variable);
    assert_eq!(Encoding::Utf16Le.width(), Width::Fixed);
    assert_eq!(Encoding::Utf16Be.width(), Width::Fixed);
  }

  #[test]
  fn pending_bound_is_three_bytes() {
    for encoding in Encoding::ALL {
      assert_eq!(encoding.max_pending_len(), 3);
    }
  }

  #[test]
  fn classify_dispatches_on_byte_order() {
    let bytes = [0x48, 0x00];
    assert_eq!(Encoding::Utf8.classify(&bytes), Sequence::Ascii(b'H'));
    assert_eq!(
      Encoding::Utf16Le.classify(&bytes),
      Sequence::Valid { ch: 'H', len: 2 }
    );
    assert_eq!(
      Encoding::Utf16Be.classify(&bytes),
      Sequence::Valid {
        ch: '\u{4800}',
        len: 2
      }
    );
  }

  #[test]
  fn bom_sets_per_family() {
    assert_eq!(Encoding::Utf8.match_bom(&[0xEF, 0xBB, 0xBF]), BomMatch::Found(3));
    assert_eq!(Encoding::Utf8.match_bom(&[0xFF, 0xFE]), BomMatch::Absent);
    assert_eq!(Encoding::Utf16Le.match_bom(&[0xFE, 0xFF]), BomMatch::Found(2));
    assert_eq!(Encoding::Utf16Be.match_bom(&[0xFF, 0xFE]), BomMatch::Found(2));
  }
}
