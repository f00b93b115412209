/// Implementation of `textcodec encode`.
///
/// Writes the UTF-8 encoding of the input to stdout or `-o <file>`.
/// With `--from-utf16` the input is reinterpreted as 16-bit code units,
/// which lets unpaired surrogates through to the encoder; each becomes
/// `EF BF BD`.
use std::io::Write as _;

use anyhow::{Context, Result, bail};
use textcodec_encoder::TextEncoder;
use textcodec_wire::ByteOrder;

use crate::EncodeArgs;
use crate::input;

/// Run the `textcodec encode` command.
///
/// # Errors
///
/// Returns an error on I/O failure, if a text file is not valid UTF-8,
/// or if a `--from-utf16` file has an odd number of bytes.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let encoder = TextEncoder::new();

    let bytes = if let Some(text) = &args.text {
        encoder.encode(text)
    } else if let Some(file) = &args.file {
        let raw = input::read_all(file)?;
        match args.from_utf16.as_deref() {
            Some(order) => encoder.encode_utf16(&code_units(&raw, parse_order(order)?)?),
            None => {
                let text = String::from_utf8(raw)
                    .with_context(|| format!("{} is not valid UTF-8", file.display()))?;
                encoder.encode(&text)
            }
        }
    } else {
        bail!("no input: pass a file or --text");
    };

    let mut writer = input::create(args.output.as_deref())?;
    writer.write_all(&bytes).context("cannot write output")?;
    writer.flush().context("cannot write output")?;

    if let Some(path) = &args.output {
        eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
    }

    Ok(())
}

fn parse_order(s: &str) -> Result<ByteOrder> {
    match s.to_ascii_lowercase().as_str() {
        "le" => Ok(ByteOrder::Little),
        "be" => Ok(ByteOrder::Big),
        other => bail!("unknown byte order: {other} (expected le or be)"),
    }
}

/// Split raw bytes into 16-bit code units.
fn code_units(raw: &[u8], order: ByteOrder) -> Result<Vec<u16>> {
    if raw.len() % 2 != 0 {
        bail!("UTF-16 input has an odd number of bytes ({})", raw.len());
    }
    Ok(raw
        .chunks_exact(2)
        .map(|pair| order.read_unit([pair[0], pair[1]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_code_units() {
        assert_eq!(
            code_units(&[0x41, 0x00, 0x3C, 0xD8], ByteOrder::Little).unwrap(),
            [0x0041, 0xD83C]
        );
        assert_eq!(
            code_units(&[0x00, 0x41], ByteOrder::Big).unwrap(),
            [0x0041]
        );
    }

    #[test]
    fn rejects_odd_length() {
        assert!(code_units(&[0x41], ByteOrder::Little).is_err());
    }

    #[test]
    fn parses_byte_order() {
        assert_eq!(parse_order("LE").unwrap(), ByteOrder::Little);
        assert_eq!(parse_order("be").unwrap(), ByteOrder::Big);
        assert!(parse_order("middle").is_err());
    }
}
