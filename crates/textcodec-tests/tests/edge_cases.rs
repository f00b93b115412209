//! Edge cases at chunk boundaries, byte order marks and error recovery.

use textcodec_decoder::{DecodeError, DecodeOptions, DecoderOptions, Encoding, TextDecoder};
use textcodec_tests::{decode_chunks, decode_whole};

fn lenient() -> DecoderOptions {
    DecoderOptions::default()
}

// ── Labels ────────────────────────────────────────────────────────────────────

#[test]
fn every_alias_constructs_its_encoding() {
    for encoding in Encoding::ALL {
        for label in encoding.labels() {
            let d = TextDecoder::new(label, lenient()).unwrap();
            assert_eq!(d.encoding(), encoding, "label {label:?}");
        }
    }
}

#[test]
fn labels_are_case_and_whitespace_insensitive() {
    for label in ["UTF-8", "  utf8\t", "\nUnicode-1-1-UTF-8 "] {
        assert_eq!(TextDecoder::new(label, lenient()).unwrap().encoding(), Encoding::Utf8);
    }
    assert_eq!(
        TextDecoder::new(" UTF-16BE ", lenient()).unwrap().encoding().name(),
        "utf-16be"
    );
}

#[test]
fn label_error_keeps_original_text() {
    let err = TextDecoder::new("  Shift_JIS ", lenient()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported encoding:   Shift_JIS ");
}

// ── Empty and absent input ────────────────────────────────────────────────────

#[test]
fn empty_input_yields_empty_text() {
    for encoding in Encoding::ALL {
        let mut d = TextDecoder::with_encoding(encoding, lenient());
        assert_eq!(d.decode_all(&[]).unwrap(), "");
        assert_eq!(d.decode(&[], DecodeOptions::streaming()).unwrap(), "");
        assert_eq!(d.flush().unwrap(), "");
    }
}

// ── UTF-8 maximal subparts ────────────────────────────────────────────────────

#[test]
fn each_invalid_span_is_one_replacement() {
    let cases: &[(&[u8], &str)] = &[
        (&[0x80], "\u{FFFD}"),
        (&[0xC1, 0xBF], "\u{FFFD}\u{FFFD}"),
        (&[0xE0, 0x80, 0x80], "\u{FFFD}\u{FFFD}\u{FFFD}"),
        (&[0xE2, 0x82, 0x41], "\u{FFFD}A"),
        (&[0xF4, 0x90, 0x80, 0x80], "\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}"),
        (&[0xF5], "\u{FFFD}"),
        (&[0xF0, 0x9F, 0x8C, 0x41], "\u{FFFD}A"),
        (&[0xFF, 0xFE], "\u{FFFD}\u{FFFD}"),
    ];
    for (bytes, expected) in cases {
        assert_eq!(
            decode_whole("utf-8", lenient(), bytes).unwrap(),
            *expected,
            "bytes {}",
            hex::encode(bytes)
        );
    }
}

#[test]
fn boundary_code_points_decode() {
    let cases: &[(&[u8], char)] = &[
        (&[0x7F], '\u{7F}'),
        (&[0xC2, 0x80], '\u{80}'),
        (&[0xDF, 0xBF], '\u{7FF}'),
        (&[0xE0, 0xA0, 0x80], '\u{800}'),
        (&[0xED, 0x9F, 0xBF], '\u{D7FF}'),
        (&[0xEE, 0x80, 0x80], '\u{E000}'),
        (&[0xEF, 0xBF, 0xBF], '\u{FFFF}'),
        (&[0xF0, 0x90, 0x80, 0x80], '\u{10000}'),
        (&[0xF4, 0x8F, 0xBF, 0xBF], '\u{10FFFF}'),
    ];
    for (bytes, ch) in cases {
        assert_eq!(
            decode_whole("utf-8", lenient(), bytes).unwrap(),
            ch.to_string(),
            "bytes {}",
            hex::encode(bytes)
        );
    }
}

// ── Carry-over ────────────────────────────────────────────────────────────────

#[test]
fn pending_never_exceeds_three_bytes() {
    let bytes = "a€🌟é".as_bytes();
    let mut d = TextDecoder::new("utf-8", lenient()).unwrap();
    for byte in bytes {
        d.decode(std::slice::from_ref(byte), DecodeOptions::streaming()).unwrap();
        assert!(d.pending_len() <= 3);
    }
    assert_eq!(d.flush().unwrap(), "");
}

#[test]
fn stray_continuation_after_carry() {
    let mut d = TextDecoder::new("utf-8", lenient()).unwrap();
    assert_eq!(d.decode(&[0xE2, 0x82], DecodeOptions::streaming()).unwrap(), "");
    assert_eq!(
        d.decode(&[0xAC, 0xAC], DecodeOptions::streaming()).unwrap(),
        "€\u{FFFD}"
    );
}

#[test]
fn fatal_offset_counts_carried_bytes() {
    let mut d = TextDecoder::new("utf-8", lenient().with_fatal(true)).unwrap();
    d.decode(&[0x41, 0xE2], DecodeOptions::streaming()).unwrap();
    let err = d.decode(&[0x82, 0x20], DecodeOptions::streaming()).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Malformed {
            encoding: Encoding::Utf8,
            offset: 0,
            len: 2
        }
    );
    assert_eq!(err.span(), Some((0, 2)));
}

#[test]
fn decoder_recovers_after_fatal_failure() {
    let mut d = TextDecoder::new("utf-8", lenient().with_fatal(true)).unwrap();
    assert!(d.decode_all(&[0xFF]).is_err());
    assert_eq!(d.decode_all(b"after").unwrap(), "after");
}

// ── Byte order marks ──────────────────────────────────────────────────────────

#[test]
fn bom_split_byte_by_byte() {
    let chunks: [&[u8]; 5] = [&[0xEF], &[0xBB], &[0xBF], b"H", b"i"];
    assert_eq!(decode_chunks("utf-8", lenient(), &chunks).unwrap(), "Hi");
}

#[test]
fn bom_prefix_then_other_byte() {
    let chunks: [&[u8]; 2] = [&[0xEF, 0xBB], b"x"];
    assert_eq!(
        decode_chunks("utf-8", lenient(), &chunks).unwrap(),
        "\u{FFFD}x"
    );
}

#[test]
fn only_one_mark_is_stripped() {
    let bytes = [0xEF, 0xBB, 0xBF, 0xEF, 0xBB, 0xBF];
    assert_eq!(decode_whole("utf-8", lenient(), &bytes).unwrap(), "\u{FEFF}");
}

#[test]
fn utf8_mark_is_content_for_utf16() {
    let mut d = TextDecoder::new("utf-16le", lenient()).unwrap();
    // EF BB -> U+BBEF, BF 00 -> U+00BF
    assert_eq!(d.decode_all(&[0xEF, 0xBB, 0xBF, 0x00]).unwrap(), "\u{BBEF}\u{BF}");
}

#[test]
fn utf16_mark_split_across_chunks() {
    let chunks: [&[u8]; 3] = [&[0xFE], &[0xFF, 0x00], &[0x41]];
    assert_eq!(decode_chunks("utf-16be", lenient(), &chunks).unwrap(), "A");
}

// ── UTF-16 ────────────────────────────────────────────────────────────────────

#[test]
fn utf16_pair_split_at_every_byte() {
    let bytes = [0x3C, 0xD8, 0x1F, 0xDF];
    for cut in 0..=bytes.len() {
        let (a, b) = bytes.split_at(cut);
        assert_eq!(decode_chunks("utf-16le", lenient(), &[a, b]).unwrap(), "🌟", "cut {cut}");
    }
}

#[test]
fn utf16_high_surrogate_at_end_of_stream() {
    let chunks: [&[u8]; 2] = [&[0x41, 0x00], &[0x00, 0xD8]];
    assert_eq!(
        decode_chunks("utf-16le", lenient(), &chunks).unwrap(),
        "A\u{FFFD}"
    );
}

#[test]
fn utf16_two_high_surrogates() {
    let bytes = [0xD8, 0x00, 0xD8, 0x3C, 0xDF, 0x1F];
    assert_eq!(
        decode_whole("utf-16be", lenient(), &bytes).unwrap(),
        "\u{FFFD}🌟"
    );
}
