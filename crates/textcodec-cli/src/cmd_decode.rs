/// Implementation of `textcodec decode`.
///
/// Reads the input incrementally and drives one streaming decoder over
/// it, writing text as soon as each chunk is decoded. After the last
/// chunk a flush releases (or reports) any bytes still held back.
///
/// ```text
///   read chunk ──▶ decode(chunk, stream: true) ──▶ write text
///        │                                            ▲
///        └── EOF ──▶ decode(empty, stream: false) ────┘
/// ```
use std::io::{ErrorKind, Read as _, Write as _};

use anyhow::{Context, Result};
use textcodec_decoder::{DecodeError, DecodeOptions, DecoderOptions, TextDecoder};

use crate::DecodeArgs;
use crate::input;

/// Run the `textcodec decode` command.
///
/// # Errors
///
/// Returns an error if the label or `--options` JSON is invalid, on any
/// I/O failure, or on malformed input when the decoder is fatal.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let options = decoder_options(args)?;
    let mut decoder = TextDecoder::new(&args.label, options)?;

    let mut reader = input::open(&args.file)?;
    let mut writer = input::create(args.output.as_deref())?;

    let mut buf = vec![0u8; args.chunk_size as usize];
    let mut offset = 0usize;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("cannot read input"),
        };

        let carried = decoder.pending_len();
        let text = decoder
            .decode(&buf[..n], DecodeOptions::streaming())
            .map_err(|e| located(e, offset, carried))?;
        writer
            .write_all(text.as_bytes())
            .context("cannot write output")?;
        offset += n;
    }

    let carried = decoder.pending_len();
    let tail = decoder
        .flush()
        .map_err(|e| located(e, offset, carried))?;
    writer
        .write_all(tail.as_bytes())
        .context("cannot write output")?;
    writer.flush().context("cannot write output")?;

    tracing::debug!(bytes = offset, chunk_size = args.chunk_size, "decoded input");
    Ok(())
}

/// Position of a decode error in the whole input.
///
/// The decoder reports offsets relative to its working buffer, which
/// starts with the `carried` bytes left over from earlier chunks, so the
/// buffer begins `carried` bytes before `chunk_start`.
fn input_offset(err: &DecodeError, chunk_start: usize, carried: usize) -> usize {
    let span_offset = err.span().map_or(0, |(offset, _)| offset);
    chunk_start - carried + span_offset
}

fn located(err: DecodeError, chunk_start: usize, carried: usize) -> anyhow::Error {
    let at = input_offset(&err, chunk_start, carried);
    anyhow::Error::new(err).context(format!("malformed input at byte {at}"))
}

/// Merge `--options` JSON with the boolean flags.
fn decoder_options(args: &DecodeArgs) -> Result<DecoderOptions> {
    let base = match &args.options {
        Some(json) => serde_json::from_str::<DecoderOptions>(json)
            .with_context(|| format!("invalid --options JSON: {json}"))?,
        None => DecoderOptions::default(),
    };

    Ok(base
        .with_fatal(base.fatal || args.fatal)
        .with_ignore_bom(base.ignore_bom || args.ignore_bom))
}
