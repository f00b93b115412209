use serde::Deserialize;

/// Construction-time options for a [`TextDecoder`](crate::TextDecoder).
///
/// Both flags are fixed for the lifetime of the decoder.
///
/// ```text
/// ┌────────────┬─────────┬──────────────────────────────────────────────┐
/// │ Field      │ Default │ Effect                                       │
/// ├────────────┼─────────┼──────────────────────────────────────────────┤
/// │ fatal      │ false   │ malformed input fails the call instead of    │
/// │            │         │ producing U+FFFD                             │
/// │ ignore_bom │ false   │ a leading byte order mark is decoded as      │
/// │            │         │ U+FEFF instead of being stripped             │
/// └────────────┴─────────┴──────────────────────────────────────────────┘
/// ```
///
/// Deserializes from a host-style options dictionary such as
/// `{"fatal": true, "ignoreBOM": false}`; missing keys take their
/// defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    pub fatal: bool,

    #[serde(rename = "ignoreBOM")]
    pub ignore_bom: bool,
}

impl DecoderOptions {
    #[must_use]
    pub fn with_fatal(mut self, fatal: bool) -> Self {
        self.fatal = fatal;
        self
    }

    #[must_use]
    pub fn with_ignore_bom(mut self, ignore_bom: bool) -> Self {
        self.ignore_bom = ignore_bom;
        self
    }
}

/// Per-call options for [`TextDecoder::decode`](crate::TextDecoder::decode).
///
/// `stream: true` means more input will follow, so an incomplete
/// trailing sequence is held back for the next call. `stream: false`
/// (the default) ends the stream: leftovers are reported as malformed
/// and the decoder is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub stream: bool,
}

impl DecodeOptions {
    /// More chunks will follow this one.
    #[must_use]
    pub const fn streaming() -> Self {
        Self { stream: true }
    }

    /// This is the last chunk of the stream.
    #[must_use]
    pub const fn flush() -> Self {
        Self { stream: false }
    }
}
