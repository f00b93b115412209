use std::iter::FusedIterator;

use crate::decoder::TextDecoder;
use crate::error::DecodeError;
use crate::options::DecodeOptions;

/// Iterator that drives a [`TextDecoder`] over a sequence of chunks.
///
/// Every chunk is decoded with `stream: true`. Once the chunks run out,
/// one final flush is issued so that bytes still held back are either
/// completed or reported. The iterator yields one `String` per chunk
/// (often empty while a sequence straddles a boundary) plus one for the
/// flush.
///
/// ```text
///   chunk 0 → "He"
///   chunk 1 → ""        (split code point held back)
///   chunk 2 → "llo ✓"
///   flush   → ""
/// ```
///
/// The first error ends iteration: the decoder has already been reset
/// by the failed call, so continuing would silently start a new stream.
///
/// Dropping the stream before it finishes resets the decoder, so bytes
/// held back from an abandoned stream never leak into the next one.
///
/// # Example
///
/// ```rust
/// use textcodec_decoder::{DecoderOptions, TextDecoder};
///
/// let mut decoder = TextDecoder::new("utf-8", DecoderOptions::default()).unwrap();
/// let chunks: [&[u8]; 3] = [b"caf", &[0xC3], &[0xA9]];
///
/// let text = decoder.decode_stream(chunks).collect_text().unwrap();
/// assert_eq!(text, "café");
/// ```
pub struct DecodeStream<'d, I> {
  decoder: &'d mut TextDecoder,
  chunks: I,
  state: StreamState,
}

/// Internal state machine for the chunk stream.
///
/// ```text
///   Chunks → Flush → Done
/// ```
///
/// `Chunks` feeds each chunk as a streaming call. When the source is
/// exhausted the stream moves to `Flush`, issues one non-streaming
/// call, and finishes in `Done`. Any error jumps straight to `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
  Chunks,
  Flush,
  Done,
}

impl<'d, I> DecodeStream<'d, I>
where
  I: Iterator,
  I::Item: AsRef<[u8]>,
{
  pub(crate) fn new(decoder: &'d mut TextDecoder, chunks: I) -> Self {
    Self {
      decoder,
      chunks,
      state: StreamState::Chunks,
    }
  }

  /// Drain the stream and concatenate every piece of text.
  ///
  /// # Errors
  ///
  /// Returns the first [`DecodeError`] produced by the decoder; text
  /// decoded before the failure is discarded.
  pub fn collect_text(self) -> Result<String, DecodeError> {
    self.collect()
  }

  fn finish(&mut self, result: Result<String, DecodeError>) -> Result<String, DecodeError> {
    if result.is_err() {
      self.state = StreamState::Done;
    }
    result
  }
}

impl<I> Iterator for DecodeStream<'_, I>
where
  I: Iterator,
  I::Item: AsRef<[u8]>,
{
  type Item = Result<String, DecodeError>;

  fn next(&mut self) -> Option<Self::Item> {
    match self.state {
      StreamState::Chunks => {
        if let Some(chunk) = self.chunks.next() {
          let result = self.decoder.decode(chunk.as_ref(), DecodeOptions::streaming());
          Some(self.finish(result))
        } else {
          self.state = StreamState::Flush;
          self.next()
        }
      }
      StreamState::Flush => {
        self.state = StreamState::Done;
        Some(self.decoder.flush())
      }
      StreamState::Done => None,
    }
  }
}

impl<I> Drop for DecodeStream<'_, I> {
  fn drop(&mut self) {
    if self.state != StreamState::Done {
      self.decoder.reset();
    }
  }
}

impl<I> FusedIterator for DecodeStream<'_, I>
where
  I: Iterator,
  I::Item: AsRef<[u8]>,
{
}
