#![no_main]

use libfuzzer_sys::fuzz_target;
use textcodec_decoder::{DecoderOptions, TextDecoder};

// Fuzz target: UTF-16LE/BE decoding of arbitrary bytes.
//
// Checks against char::decode_utf16 for even-length input:
// - One U+FFFD per lone surrogate, no other differences
fuzz_target!(|data: &[u8]| {
    let even = &data[..data.len() & !1];
    let options = DecoderOptions::default().with_ignore_bom(true);

    for (label, read) in [
        ("utf-16le", u16::from_le_bytes as fn([u8; 2]) -> u16),
        ("utf-16be", u16::from_be_bytes as fn([u8; 2]) -> u16),
    ] {
        let units = even.chunks_exact(2).map(|p| read([p[0], p[1]]));
        let expected: String = char::decode_utf16(units)
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();

        let decoded = TextDecoder::new(label, options)
            .unwrap()
            .decode_all(even)
            .unwrap();
        assert_eq!(decoded, expected);

        // Odd trailing byte never panics
        let _ = TextDecoder::new(label, options).unwrap().decode_all(data);
    }
});
