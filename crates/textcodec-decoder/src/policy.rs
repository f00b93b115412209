use textcodec_types::Encoding;
use textcodec_wire::Sequence;

use crate::error::DecodeError;

/// The Unicode replacement character emitted for malformed input.
pub const REPLACEMENT: char = '\u{FFFD}';

/// How a decoder reacts to malformed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Substitute one U+FFFD per malformed span.
    #[default]
    Replacement,
    /// Fail the call on the first malformed span.
    Fatal,
}

impl ErrorMode {
    #[must_use]
    pub fn from_fatal(fatal: bool) -> Self {
        if fatal { Self::Fatal } else { Self::Replacement }
    }
}

/// What the scan loop should do with one classified span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Append this character and advance past the span.
    Emit(char),
    /// Stop scanning and keep the span for the next call.
    Carry,
}

/// Turn a classification into an action, the single place where the
/// streaming flag and the error mode are consulted.
///
/// ```text
///   sequence       stream   mode          result
///   ────────────   ──────   ───────────   ─────────────────────
///   Ascii/Valid    any      any           Emit(ch)
///   Incomplete     true     any           Carry
///   Incomplete     false    Replacement   Emit(U+FFFD)
///   Incomplete     false    Fatal         Err(Truncated)
///   Invalid        any      Replacement   Emit(U+FFFD)
///   Invalid        any      Fatal         Err(Malformed)
/// ```
///
/// `offset` is the span's position in the call's working buffer and
/// only feeds error reporting.
pub(crate) fn apply(
    sequence: Sequence,
    mode: ErrorMode,
    stream: bool,
    encoding: Encoding,
    offset: usize,
) -> Result<Step, DecodeError> {
    let error = match sequence {
        Sequence::Ascii(byte) => return Ok(Step::Emit(char::from(byte))),
        Sequence::Valid { ch, .. } => return Ok(Step::Emit(ch)),
        Sequence::Incomplete { .. } if stream => return Ok(Step::Carry),
        Sequence::Incomplete { len } => DecodeError::Truncated {
            encoding,
            offset,
            len,
        },
        Sequence::Invalid { len } => DecodeError::Malformed {
            encoding,
            offset,
            len,
        },
    };

    match mode {
        ErrorMode::Fatal => Err(error),
        ErrorMode::Replacement => {
            tracing::trace!(%encoding, offset, len = sequence.consumed(), "replacing malformed span");
            Ok(Step::Emit(REPLACEMENT))
        }
    }
}
