#![no_main]

use libfuzzer_sys::fuzz_target;
use textcodec_types::{labels, Encoding};

// Fuzz target: label normalization and lookup.
//
// Catches bugs in:
// - Trimming of non-ASCII or mixed whitespace
// - Lookup succeeding for strings outside the alias table
fuzz_target!(|label: &str| {
    match Encoding::for_label(label) {
        Ok(encoding) => {
            let normalized = labels::normalize(label);
            assert!(encoding.labels().any(|alias| alias == normalized));
        }
        Err(e) => assert!(e.to_string().ends_with(label)),
    }
});
