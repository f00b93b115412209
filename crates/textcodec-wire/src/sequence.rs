/// Classification of the span at the front of a byte buffer.
///
/// Produced by [`utf8::classify`](crate::utf8::classify) and
/// [`utf16::classify`](crate::utf16::classify). The caller advances
/// its cursor by [`consumed`](Self::consumed) bytes after acting on
/// the result, except for `Incomplete` in streaming mode where the
/// bytes are carried over to the next call instead.
///
/// ```text
///   Sequence
///   ├── Ascii(u8)          ← single byte 0x00..=0x7F (UTF-8 only)
///   ├── Valid { ch, len }  ← complete, well-formed code point
///   ├── Invalid { len }    ← maximal subpart of a malformed sequence
///   └── Incomplete { len } ← buffer ended; bytes so far may still become valid
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sequence {
    /// A one-byte ASCII code point.
    Ascii(u8),

    /// A complete code point spanning `len` bytes.
    Valid { ch: char, len: usize },

    /// `len` bytes that can never be part of a valid sequence.
    ///
    /// The byte that revealed the problem is *not* included when it
    /// could start a new sequence of its own, so the caller never
    /// re-reads bytes already judged invalid and never swallows a
    /// byte that might begin something valid.
    Invalid { len: usize },

    /// The buffer ended after `len` bytes that are still consistent
    /// with a valid sequence.
    Incomplete { len: usize },
}

impl Sequence {
    /// Number of bytes this classification covers.
    #[must_use]
    pub fn consumed(self) -> usize {
        match self {
            Self::Ascii(_) => 1,
            Self::Valid { len, .. } | Self::Invalid { len } | Self::Incomplete { len } => len,
        }
    }

    /// The decoded character, if the span is well-formed.
    #[must_use]
    pub fn char(self) -> Option<char> {
        match self {
            Self::Ascii(byte) => Some(char::from(byte)),
            Self::Valid { ch, .. } => Some(ch),
            Self::Invalid { .. } | Self::Incomplete { .. } => None,
        }
    }

    #[must_use]
    pub fn is_incomplete(self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}
