#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcodec_decoder::{DecodeOptions, DecoderOptions, Encoding, TextDecoder};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    encoding_id: u8,
    fatal: bool,
    ignore_bom: bool,
    cuts: Vec<u8>,
    data: Vec<u8>,
}

// Fuzz target: decoding split chunks must match decoding the whole.
//
// Catches bugs in:
// - Carry-over of incomplete sequences
// - Deferred byte order mark decisions
// - Pending buffer growing past three bytes
fuzz_target!(|input: FuzzInput| {
    let encoding = Encoding::ALL[usize::from(input.encoding_id) % Encoding::ALL.len()];
    let options = DecoderOptions::default()
        .with_fatal(input.fatal)
        .with_ignore_bom(input.ignore_bom);

    let whole = TextDecoder::with_encoding(encoding, options).decode_all(&input.data);

    let mut cuts: Vec<usize> = input
        .cuts
        .iter()
        .map(|&c| usize::from(c).min(input.data.len()))
        .collect();
    cuts.sort_unstable();

    let mut decoder = TextDecoder::with_encoding(encoding, options);
    let mut chunked = String::new();
    let mut start = 0;
    let mut failed = false;

    for cut in cuts.into_iter().chain(std::iter::once(input.data.len())) {
        match decoder.decode(&input.data[start..cut], DecodeOptions::streaming()) {
            Ok(text) => chunked.push_str(&text),
            Err(_) => {
                failed = true;
                break;
            }
        }
        assert!(decoder.pending_len() <= encoding.max_pending_len());
        start = cut;
    }

    if !failed {
        match decoder.flush() {
            Ok(text) => chunked.push_str(&text),
            Err(_) => failed = true,
        }
    }

    match whole {
        Ok(text) => {
            assert!(!failed);
            assert_eq!(chunked, text);
        }
        Err(_) => assert!(failed),
    }
});
