use textcodec_types::{Encoding, ErrorKind, LabelError};

/// Errors that can occur while constructing a decoder or decoding text.
///
/// Construction can only fail on the label; decoding can only fail in
/// fatal mode. A decoder in replacement mode never returns `Err` from
/// [`decode`](crate::TextDecoder::decode).
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Label(LabelError)  ← unknown label at construction   (RangeError)
///   ├── Malformed          ← invalid byte span, fatal mode    (TypeError)
///   └── Truncated          ← incomplete span at flush, fatal  (TypeError)
/// ```
///
/// `offset` counts from the first byte the failing call looked at,
/// which includes any bytes carried over from the previous streaming
/// call ahead of the new input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The encoding label was not recognised.
    #[error(transparent)]
    Label(#[from] LabelError),

    /// A byte span can never form a valid sequence.
    #[error(
        "unable to decode text; reason: invalid {encoding} sequence ({len} byte(s) at offset {offset})"
    )]
    Malformed {
        encoding: Encoding,
        offset: usize,
        len: usize,
    },

    /// The input ended in the middle of a sequence on a final call.
    #[error(
        "unable to decode text; reason: truncated {encoding} sequence ({len} byte(s) at offset {offset})"
    )]
    Truncated {
        encoding: Encoding,
        offset: usize,
        len: usize,
    },
}

impl DecodeError {
    /// The host exception kind this error maps to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Label(inner) => inner.kind(),
            Self::Malformed { .. } | Self::Truncated { .. } => ErrorKind::Type,
        }
    }

    /// Byte offset and length of the offending span, for decode errors.
    #[must_use]
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            Self::Label(_) => None,
            Self::Malformed { offset, len, .. } | Self::Truncated { offset, len, .. } => {
                Some((*offset, *len))
            }
        }
    }
}
