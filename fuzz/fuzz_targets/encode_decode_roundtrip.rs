#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcodec_decoder::{DecoderOptions, TextDecoder};
use textcodec_encoder::TextEncoder;

#[derive(Debug, Arbitrary)]
enum FuzzInput {
    Text(String),
    Units(Vec<u16>),
}

// Fuzz target: encoder output must always decode cleanly.
//
// Catches bugs in:
// - Surrogate pairing in encode_utf16
// - Lone surrogate replacement
// - Decoder rejecting well-formed UTF-8
fuzz_target!(|input: FuzzInput| {
    let encoder = TextEncoder::new();
    let mut decoder = TextDecoder::new(
        "utf-8",
        DecoderOptions::default().with_fatal(true).with_ignore_bom(true),
    )
    .unwrap();

    match input {
        FuzzInput::Text(text) => {
            let bytes = encoder.encode(&text);
            assert_eq!(decoder.decode_all(&bytes).unwrap(), text);
        }
        FuzzInput::Units(units) => {
            let bytes = encoder.encode_utf16(&units);
            let expected = String::from_utf16_lossy(&units);
            assert_eq!(decoder.decode_all(&bytes).unwrap(), expected);
        }
    }
});
