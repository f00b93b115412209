#![no_main]

use libfuzzer_sys::fuzz_target;
use textcodec_decoder::{DecoderOptions, TextDecoder};

// Fuzz target: UTF-8 decoding of arbitrary bytes.
//
// Checks against the standard library:
// - Lenient output equals String::from_utf8_lossy (after BOM handling)
// - Fatal mode succeeds exactly when the bytes are valid UTF-8
fuzz_target!(|data: &[u8]| {
    let options = DecoderOptions::default().with_ignore_bom(true);
    let lenient = TextDecoder::new("utf-8", options)
        .unwrap()
        .decode_all(data)
        .unwrap();
    assert_eq!(lenient, String::from_utf8_lossy(data));

    let fatal = TextDecoder::new("utf-8", options.with_fatal(true))
        .unwrap()
        .decode_all(data);
    assert_eq!(fatal.is_ok(), std::str::from_utf8(data).is_ok());
});
