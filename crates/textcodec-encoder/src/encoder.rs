use textcodec_types::Encoding;

/// UTF-8 text encoder.
///
/// The encoder has no configuration and no state: its target encoding
/// is always UTF-8, and every call is independent. Because a Rust
/// `&str` is already valid UTF-8, [`encode`](Self::encode) cannot fail.
/// Input that may hold unpaired surrogates (16-bit code units from a
/// host string) goes through [`encode_utf16`](Self::encode_utf16),
/// which substitutes U+FFFD for each one.
///
/// # Usage
///
/// ```rust
/// use textcodec_encoder::TextEncoder;
///
/// let encoder = TextEncoder::new();
/// assert_eq!(encoder.encoding(), "utf-8");
/// assert_eq!(encoder.encode("€"), [0xE2, 0x82, 0xAC]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextEncoder;

impl TextEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Canonical name of the output encoding, always `"utf-8"`.
    #[must_use]
    pub fn encoding(&self) -> &'static str {
        Encoding::Utf8.name()
    }

    /// Encode `text` as UTF-8 bytes.
    ///
    /// U+FEFF, NUL and control characters are encoded like any other
    /// scalar value. No byte order mark is ever added.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    /// Encode a sequence of UTF-16 code units as UTF-8 bytes.
    ///
    /// Surrogate pairs are combined into one 4-byte sequence. A lone
    /// high or low surrogate becomes U+FFFD (`EF BF BD`).
    #[must_use]
    pub fn encode_utf16(&self, units: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(units.len() * 3);
        let mut buf = [0u8; 4];
        let mut replaced = 0usize;

        for result in char::decode_utf16(units.iter().copied()) {
            let ch = result.unwrap_or_else(|_| {
                replaced += 1;
                char::REPLACEMENT_CHARACTER
            });
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }

        if replaced > 0 {
            tracing::trace!(replaced, "replaced lone surrogates while encoding");
        }

        out
    }
}
