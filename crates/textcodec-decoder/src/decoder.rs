use textcodec_types::Encoding;
use tracing::{debug, trace};

use crate::bom::{self, BomDecision};
use crate::error::DecodeError;
use crate::options::{DecodeOptions, DecoderOptions};
use crate::policy::{self, ErrorMode, Step};
use crate::state::DecoderState;
use crate::streaming::DecodeStream;

/// Incremental text decoder for UTF-8, UTF-16LE and UTF-16BE.
///
/// A decoder turns a sequence of byte chunks into text. Chunks may be
/// split anywhere, including in the middle of a code point or a byte
/// order mark: bytes that cannot be decided yet are carried over to
/// the next call as long as that call is made with
/// [`DecodeOptions::streaming`].
///
/// Each call runs five steps:
///
///   1. **Combine**: prepend bytes carried over from the previous
///      streaming call to the new input.
///   2. **BOM**: on the first call of a stream, strip a leading byte
///      order mark (unless `ignore_bom`), or defer if the input is
///      still a prefix of one.
///   3. **Scan**: classify spans left to right and push characters.
///      Malformed spans become U+FFFD, or fail the call in fatal mode.
///   4. **Carry**: while streaming, an incomplete trailing span is
///      kept for the next call.
///   5. **Reset**: a non-streaming call (or any failed call) returns
///      the decoder to its just-constructed state.
///
/// A decoder is not meant to be shared: `decode` takes `&mut self`, so
/// calls against one instance are serialized by the borrow checker.
///
/// # Example
///
/// ```rust
/// use textcodec_decoder::{DecodeOptions, DecoderOptions, TextDecoder};
///
/// let mut decoder = TextDecoder::new("utf-8", DecoderOptions::default()).unwrap();
///
/// // U+1F31F split across two chunks
/// let first = decoder.decode(&[0xF0, 0x9F], DecodeOptions::streaming()).unwrap();
/// let second = decoder.decode(&[0x8C, 0x9F], DecodeOptions::flush()).unwrap();
///
/// assert_eq!(first, "");
/// assert_eq!(second, "🌟");
/// ```
#[derive(Clone, Debug)]
pub struct TextDecoder {
    encoding: Encoding,
    options: DecoderOptions,
    state: DecoderState,
}

impl TextDecoder {
    /// Create a decoder for the encoding named by `label`.
    ///
    /// The label is trimmed of ASCII whitespace and matched
    /// case-insensitively; the empty label selects UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Label`] (a range error) if the label is
    /// not recognised.
    pub fn new(label: &str, options: DecoderOptions) -> Result<Self, DecodeError> {
        let encoding = Encoding::for_label(label)?;
        Ok(Self::with_encoding(encoding, options))
    }

    /// Create a decoder for an already-resolved encoding.
    #[must_use]
    pub fn with_encoding(encoding: Encoding, options: DecoderOptions) -> Self {
        debug!(
            %encoding,
            fatal = options.fatal,
            ignore_bom = options.ignore_bom,
            "created text decoder"
        );

        Self {
            encoding,
            options,
            state: DecoderState::default(),
        }
    }

    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[must_use]
    pub fn fatal(&self) -> bool {
        self.options.fatal
    }

    #[must_use]
    pub fn ignore_bom(&self) -> bool {
        self.options.ignore_bom
    }

    #[must_use]
    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Returns `true` if bytes are being held for the next call.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.state.pending.is_empty()
    }

    /// Number of bytes held for the next call (never more than 3).
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.state.pending.len()
    }

    /// Drop any carried-over bytes and forget the byte order mark
    /// decision, as if the decoder had just been constructed.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Decode one chunk of input.
    ///
    /// With `options.stream == true`, an incomplete sequence at the
    /// end of the input is held back and completed by the next call.
    /// With `options.stream == false`, the stream ends here: any
    /// leftover bytes are reported as one malformed span, and the
    /// decoder is reset for an unrelated stream. An empty `input` with
    /// `stream == false` simply flushes.
    ///
    /// In replacement mode this never fails. In fatal mode a failure
    /// carries no partial text, and the decoder is reset: carried-over
    /// bytes are discarded along with the rest of the call.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Malformed`] if an invalid span is found in
    ///   fatal mode.
    /// - [`DecodeError::Truncated`] if a non-streaming call ends in the
    ///   middle of a sequence in fatal mode.
    pub fn decode(&mut self, input: &[u8], options: DecodeOptions) -> Result<String, DecodeError> {
        let working = self.state.take_working(input);
        let result = self.decode_working(working, options.stream);

        if let Err(e) = &result {
            debug!(encoding = %self.encoding, error = %e, "fatal decode failure, resetting decoder");
        }

        if !options.stream || result.is_err() {
            self.state.reset();
        }

        result
    }

    /// Decode a complete input in one non-streaming call.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn decode_all(&mut self, input: &[u8]) -> Result<String, DecodeError> {
        self.decode(input, DecodeOptions::flush())
    }

    /// End the current stream without new input.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] in fatal mode if bytes of an
    /// incomplete sequence were still held back.
    pub fn flush(&mut self) -> Result<String, DecodeError> {
        self.decode(&[], DecodeOptions::flush())
    }

    /// Decode an iterator of chunks, yielding text per chunk followed by
    /// one final flush.
    pub fn decode_stream<I>(&mut self, chunks: I) -> DecodeStream<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        DecodeStream::new(self, chunks.into_iter())
    }

    /// Steps 2–4 over the combined buffer. Leaves `state.pending` set
    /// only when bytes must be carried to the next call.
    fn decode_working(&mut self, working: Vec<u8>, stream: bool) -> Result<String, DecodeError> {
        let mut pos = 0;

        if !self.state.bom_resolved {
            match bom::resolve(self.encoding, self.options.ignore_bom, &working, stream) {
                BomDecision::Defer => {
                    trace!(encoding = %self.encoding, held = working.len(), "deferring byte order mark decision");
                    self.state.pending = working;
                    return Ok(String::new());
                }
                BomDecision::Strip(len) => {
                    trace!(encoding = %self.encoding, len, "stripped byte order mark");
                    pos = len;
                }
                BomDecision::Keep => {}
            }
            self.state.bom_resolved = true;
        }

        let mode = ErrorMode::from_fatal(self.options.fatal);
        let mut text = String::with_capacity(working.len() - pos);

        while pos < working.len() {
            let sequence = self.encoding.classify(&working[pos..]);

            match policy::apply(sequence, mode, stream, self.encoding, pos)? {
                Step::Emit(ch) => text.push(ch),
                Step::Carry => {
                    let held = &working[pos..];
                    trace!(encoding = %self.encoding, held = held.len(), "carrying incomplete sequence");
                    self.state.pending = held.to_vec();
                    break;
                }
            }

            pos += sequence.consumed();
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn decoder(label: &str) -> TextDecoder {
        TextDecoder::new(label, DecoderOptions::default()).unwrap()
    }

    fn fatal(label: &str) -> TextDecoder {
        TextDecoder::new(label, DecoderOptions::default().with_fatal(true)).unwrap()
    }

    #[test]
    fn decodes_ascii() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode_all(b"Hello").unwrap(), "Hello");
    }

    #[test]
    fn exposes_construction_properties() {
        let d = TextDecoder::new(
            " UTF-16 ",
            DecoderOptions::default().with_fatal(true).with_ignore_bom(true),
        )
        .unwrap();
        assert_eq!(d.encoding(), Encoding::Utf16Le);
        assert_eq!(d.encoding().name(), "utf-16le");
        assert!(d.fatal());
        assert!(d.ignore_bom());
    }

    #[test]
    fn rejects_unknown_label() {
        let err = TextDecoder::new("iso-2022-cn", DecoderOptions::default()).unwrap_err();
        assert_eq!(err.kind(), textcodec_types::ErrorKind::Range);
    }

    #[test]
    fn lone_overlong_lead_is_replaced() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode_all(&[0xC0]).unwrap(), "\u{FFFD}");
    }

    #[test]
    fn split_code_point_is_carried() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode(&[0xF0, 0x9F], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.pending_len(), 2);
        assert_eq!(d.decode(&[0x8C, 0x9F], DecodeOptions::streaming()).unwrap(), "🌟");
        assert!(!d.has_pending());
    }

    #[test]
    fn single_byte_chunks_stay_buffered() {
        let mut d = decoder("utf-8");
        for byte in [0xF0, 0x9F, 0x8C] {
            assert_eq!(d.decode(&[byte], DecodeOptions::streaming()).unwrap(), "");
        }
        assert_eq!(d.pending_len(), 3);
        assert_eq!(d.decode(&[0x9F], DecodeOptions::flush()).unwrap(), "🌟");
    }

    #[test]
    fn truncated_then_ascii_on_flush() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode(&[0xF0, 0x9F], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.decode(&[0x41], DecodeOptions::flush()).unwrap(), "\u{FFFD}A");
    }

    #[test]
    fn invalid_resolution_resumes_in_new_bytes() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode(&[0xC3], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(
            d.decode(&[0x41, 0xC3, 0xA9], DecodeOptions::streaming()).unwrap(),
            "\u{FFFD}Aé"
        );
    }

    #[test]
    fn incomplete_on_flush_is_one_replacement() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode_all(&[0x48, 0xF0, 0x9F, 0x8C]).unwrap(), "H\u{FFFD}");
        assert!(!d.has_pending());
    }

    #[test]
    fn fatal_rejects_invalid() {
        let mut d = fatal("utf-8");
        assert_eq!(
            d.decode_all(&[0xC0]),
            Err(DecodeError::Malformed {
                encoding: Encoding::Utf8,
                offset: 0,
                len: 1
            })
        );
    }

    #[test]
    fn fatal_rejects_truncated_flush() {
        let mut d = fatal("utf-8");
        assert_eq!(d.decode(&[0x41, 0xE2, 0x82], DecodeOptions::streaming()).unwrap(), "A");
        assert_eq!(
            d.flush(),
            Err(DecodeError::Truncated {
                encoding: Encoding::Utf8,
                offset: 0,
                len: 2
            })
        );
    }

    #[test]
    fn fatal_failure_discards_pending_and_resets() {
        let mut d = fatal("utf-8");
        assert_eq!(d.decode(&[0xEF, 0xBB, 0xBF, 0xE2], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.pending_len(), 1);

        assert!(d.decode(&[0x41], DecodeOptions::streaming()).is_err());
        assert!(!d.has_pending());

        // BOM handling starts over on the next stream
        assert_eq!(d.decode_all(&[0xEF, 0xBB, 0xBF, 0x48, 0x69]).unwrap(), "Hi");
    }

    #[test]
    fn strips_utf8_bom() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode_all(&[0xEF, 0xBB, 0xBF, 0x48, 0x69]).unwrap(), "Hi");
    }

    #[test]
    fn ignore_bom_keeps_feff() {
        let mut d =
            TextDecoder::new("utf-8", DecoderOptions::default().with_ignore_bom(true)).unwrap();
        assert_eq!(
            d.decode_all(&[0xEF, 0xBB, 0xBF, 0x48, 0x69]).unwrap(),
            "\u{FEFF}Hi"
        );
    }

    #[test]
    fn bom_split_across_chunks() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode(&[0xEF], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.decode(&[0xBB], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.decode(&[0xBF, 0x48], DecodeOptions::streaming()).unwrap(), "H");
        assert_eq!(d.decode(&[0x69], DecodeOptions::flush()).unwrap(), "i");
    }

    #[test]
    fn bom_only_stripped_at_stream_start() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode(b"a", DecodeOptions::streaming()).unwrap(), "a");
        assert_eq!(
            d.decode(&[0xEF, 0xBB, 0xBF], DecodeOptions::streaming()).unwrap(),
            "\u{FEFF}"
        );
        assert_eq!(d.flush().unwrap(), "");

        // The flush reset the decoder, so a new stream strips again
        assert_eq!(d.decode_all(&[0xEF, 0xBB, 0xBF, b'b']).unwrap(), "b");
    }

    #[test]
    fn empty_streaming_call_defers() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode(&[], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.decode(&[0xEF, 0xBB, 0xBF, b'x'], DecodeOptions::flush()).unwrap(), "x");
    }

    #[test]
    fn partial_bom_on_flush_is_malformed() {
        let mut d = decoder("utf-8");
        assert_eq!(d.decode(&[0xEF, 0xBB], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.flush().unwrap(), "\u{FFFD}");
    }

    #[test]
    fn flush_is_idempotent() {
        let mut d = decoder("utf-8");
        assert_eq!(d.flush().unwrap(), "");
        assert_eq!(d.flush().unwrap(), "");
    }

    #[test]
    fn utf16le_with_surrogate_pair() {
        let mut d = decoder("utf-16le");
        let bytes = [0x48, 0x00, 0x3C, 0xD8, 0x1F, 0xDF];
        assert_eq!(d.decode_all(&bytes).unwrap(), "H🌟");
    }

    #[test]
    fn utf16be_split_surrogate_pair() {
        let mut d = decoder("utf-16be");
        assert_eq!(d.decode(&[0xD8, 0x3C, 0xDF], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.pending_len(), 3);
        assert_eq!(d.decode(&[0x1F], DecodeOptions::flush()).unwrap(), "🌟");
    }

    #[test]
    fn utf16_strips_either_mark_keeping_label_order() {
        let mut d = decoder("utf-16le");
        assert_eq!(d.decode_all(&[0xFE, 0xFF, 0x48, 0x00]).unwrap(), "H");

        let mut d = decoder("utf-16be");
        assert_eq!(d.decode_all(&[0xFF, 0xFE, 0x00, 0x48]).unwrap(), "H");
    }

    #[test]
    fn utf16_lone_surrogates_replaced() {
        let mut d = decoder("utf-16le");
        // lone high then 'A', then lone low
        let bytes = [0x3C, 0xD8, 0x41, 0x00, 0x1F, 0xDF];
        assert_eq!(d.decode_all(&bytes).unwrap(), "\u{FFFD}A\u{FFFD}");
    }

    #[test]
    fn utf16_odd_byte_on_flush() {
        let mut d = decoder("utf-16le");
        assert_eq!(d.decode_all(&[0x48, 0x00, 0x69]).unwrap(), "H\u{FFFD}");

        let mut d = fatal("utf-16le");
        assert_eq!(
            d.decode_all(&[0x48, 0x00, 0x69]),
            Err(DecodeError::Truncated {
                encoding: Encoding::Utf16Le,
                offset: 2,
                len: 1
            })
        );
    }

    #[test]
    fn utf16_high_surrogate_then_odd_byte_on_flush() {
        let mut d = decoder("utf-16le");
        assert_eq!(d.decode_all(&[0x3C, 0xD8, 0x1F]).unwrap(), "\u{FFFD}");
    }

    #[test]
    fn reset_drops_pending() {
        let mut d = decoder("utf-8");
        d.decode(&[0xE2, 0x82], DecodeOptions::streaming()).unwrap();
        d.reset();
        assert!(!d.has_pending());
        assert_eq!(d.decode_all(&[0xAC]).unwrap(), "\u{FFFD}");
    }

    #[test]
    #[traced_test]
    fn logs_deferral_and_failures() {
        let mut d = fatal("utf-8");
        d.decode(&[0xEF], DecodeOptions::streaming()).unwrap();
        assert!(logs_contain("deferring byte order mark decision"));

        let _ = d.decode(&[0x41], DecodeOptions::flush());
        assert!(logs_contain("fatal decode failure"));
    }
}
