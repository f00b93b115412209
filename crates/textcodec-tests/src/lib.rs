//! Shared helpers for the textcodec integration tests, benchmarks and
//! the golden fixture generator.

use textcodec_decoder::{DecodeError, DecodeOptions, DecoderOptions, TextDecoder};

// ── Golden fixtures ───────────────────────────────────────────────────────────

/// A named byte stream committed under `tests/golden/<name>.bin`.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub label: &'static str,
    pub build: fn() -> Vec<u8>,
}

/// Every golden fixture, in generation order.
///
/// | Name                    | Label    | Contents                                    |
/// |-------------------------|----------|---------------------------------------------|
/// | utf8_bom_mixed          | utf-8    | BOM + ASCII, Latin-1, emoji, newline        |
/// | utf8_malformed          | utf-8    | overlong lead, encoded surrogate, truncated |
/// | utf16le_bom             | utf-16le | FF FE mark + BMP and supplementary text     |
/// | utf16be_lone_surrogate  | utf-16be | lone high, lone low, trailing odd byte      |
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "utf8_bom_mixed",
        label: "utf-8",
        build: utf8_bom_mixed,
    },
    Fixture {
        name: "utf8_malformed",
        label: "utf-8",
        build: utf8_malformed,
    },
    Fixture {
        name: "utf16le_bom",
        label: "utf-16le",
        build: utf16le_bom,
    },
    Fixture {
        name: "utf16be_lone_surrogate",
        label: "utf-16be",
        build: utf16be_lone_surrogate,
    },
];

/// Look up a fixture by name.
#[must_use]
pub fn fixture(name: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|f| f.name == name)
}

fn utf8_bom_mixed() -> Vec<u8> {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("Hi café 🌟\n".as_bytes());
    bytes
}

fn utf8_malformed() -> Vec<u8> {
    let mut bytes = b"ok ".to_vec();
    bytes.push(0xC0);
    bytes.extend_from_slice(b" A ");
    // U+D800 encoded as if it were a scalar value
    bytes.extend_from_slice(&[0xED, 0xA0, 0x80]);
    bytes.extend_from_slice(b" B ");
    bytes.extend_from_slice(&[0xF0, 0x9F]);
    bytes
}

fn utf16le_bom() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "Hé🌟".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

fn utf16be_lone_surrogate() -> Vec<u8> {
    let mut bytes = Vec::new();
    for unit in [0x0041_u16, 0xD800, 0x0042, 0xDC00, 0x0043] {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes.push(0x00);
    bytes
}

// ── Chunked decoding ──────────────────────────────────────────────────────────

/// Split `bytes` at the given cut points. Points past the end are
/// clamped and duplicates produce empty chunks.
#[must_use]
pub fn split_at_points<'a>(bytes: &'a [u8], points: &[usize]) -> Vec<&'a [u8]> {
    let mut cuts: Vec<usize> = points.iter().map(|&p| p.min(bytes.len())).collect();
    cuts.sort_unstable();

    let mut chunks = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        chunks.push(&bytes[start..cut]);
        start = cut;
    }
    chunks.push(&bytes[start..]);
    chunks
}

/// Decode `chunks` with one decoder: every chunk streaming, then a flush.
///
/// # Errors
///
/// Returns a label error, or the first error from a fatal decoder.
pub fn decode_chunks(
    label: &str,
    options: DecoderOptions,
    chunks: &[&[u8]],
) -> Result<String, DecodeError> {
    let mut decoder = TextDecoder::new(label, options)?;
    let mut text = String::new();
    for chunk in chunks {
        text.push_str(&decoder.decode(chunk, DecodeOptions::streaming())?);
    }
    text.push_str(&decoder.flush()?);
    Ok(text)
}

/// Decode `bytes` in one non-streaming call.
///
/// # Errors
///
/// Returns a label error, or the error from a fatal decoder.
pub fn decode_whole(
    label: &str,
    options: DecoderOptions,
    bytes: &[u8],
) -> Result<String, DecodeError> {
    TextDecoder::new(label, options)?.decode_all(bytes)
}
