//! Golden fixture generator for the textcodec conformance suite.
//!
//! Writes every fixture listed in [`textcodec_tests::FIXTURES`] to
//! `tests/golden/<name>.bin`. The conformance tests check the committed
//! files against the same builders, so rerun this after changing one.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p textcodec-tests
//! ```

#![allow(clippy::pedantic)]

use textcodec_tests::FIXTURES;

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");
    std::fs::create_dir_all(&golden_dir).expect("create golden dir");

    for fixture in FIXTURES {
        let path = golden_dir.join(format!("{}.bin", fixture.name));
        let bytes = (fixture.build)();
        std::fs::write(&path, &bytes).expect("write fixture");
        println!("  {:<24} {:>4} bytes  {}", fixture.name, bytes.len(), hex::encode(&bytes));
    }

    println!("All golden fixtures written to {}", golden_dir.display());
}
