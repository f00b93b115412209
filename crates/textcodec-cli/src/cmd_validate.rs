/// Implementation of `textcodec validate`.
///
/// Decodes the entire input with a fatal decoder and reports either a
/// series of success checkmarks (`✓`) or a diagnostic failure line (`✗`).
///
/// # Success output
///
/// ```text
/// ✓ Encoding: utf-8 (label "UTF8")
/// ✓ BOM: stripped (efbbbf)
/// ✓ Text: 1204 characters decoded without error
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: unable to decode text; reason: invalid utf-8 sequence (1 byte(s) at offset 17)
/// ```
use anyhow::{Result, anyhow};
use textcodec_decoder::{DecoderOptions, TextDecoder};
use textcodec_wire::BomMatch;

use crate::ValidateArgs;
use crate::input;

/// Run the `textcodec validate` command.
///
/// # Errors
///
/// Returns an error if the label is unknown, the input cannot be read,
/// or the input is not well formed in the selected encoding.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let options = DecoderOptions::default()
        .with_fatal(true)
        .with_ignore_bom(args.ignore_bom);
    let mut decoder = TextDecoder::new(&args.label, options)?;
    let bytes = input::read_all(&args.file)?;

    match decoder.decode_all(&bytes) {
        Ok(text) => {
            println!(
                "✓ Encoding: {} (label {:?})",
                decoder.encoding(),
                args.label
            );
            println!("✓ BOM: {}", bom_summary(&decoder, &bytes));
            let count = text.chars().count();
            println!(
                "✓ Text: {count} character{} decoded without error",
                if count == 1 { "" } else { "s" }
            );
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {e}");
            Err(anyhow!("validation failed"))
        }
    }
}

fn bom_summary(decoder: &TextDecoder, bytes: &[u8]) -> String {
    if decoder.ignore_bom() {
        return "kept as content (--ignore-bom)".to_string();
    }
    match decoder.encoding().match_bom(bytes) {
        BomMatch::Found(len) => format!("stripped ({})", hex::encode(&bytes[..len])),
        BomMatch::Partial | BomMatch::Absent => "none".to_string(),
    }
}
