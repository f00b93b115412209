/// Implementation of `textcodec inspect`.
///
/// Walks the input one sequence at a time and reports what a decoder
/// would see: the byte order mark decision, how many characters decode
/// cleanly, and where every malformed span sits. Unlike `decode`, it
/// never stops at the first problem.
///
/// # Output format
///
/// ```text
/// Encoding:   utf-8
/// Size:       14 bytes
/// BOM:        efbbbf (stripped)
/// Characters: 8 decoded, 2 malformed
/// Malformed spans:
///   offset 5     len 1  ff         invalid
///   offset 12    len 2  f09f       truncated
/// ```
use anyhow::Result;
use serde::Serialize;
use textcodec_types::Encoding;
use textcodec_wire::{BomMatch, Sequence};

use crate::InspectArgs;
use crate::input;

#[derive(Debug, Serialize)]
struct Report {
    encoding: &'static str,
    bytes: usize,
    bom: BomReport,
    characters: usize,
    malformed: usize,
    spans: Vec<Span>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum BomReport {
    Stripped { bytes: String },
    Ignored,
    Absent,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct Span {
    offset: usize,
    len: usize,
    bytes: String,
    kind: SpanKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum SpanKind {
    /// Can never become well formed.
    Invalid,
    /// Cut off by the end of input.
    Truncated,
}

/// Run the `textcodec inspect` command.
///
/// # Errors
///
/// Returns an error if the label is unknown or the input cannot be read.
pub fn run(args: &InspectArgs) -> Result<()> {
    let encoding = Encoding::for_label(&args.label)?;
    let bytes = input::read_all(&args.file)?;
    let report = build_report(encoding, &bytes, args.ignore_bom, args.limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Encoding:   {}", report.encoding);
    println!("Size:       {} bytes", report.bytes);
    match &report.bom {
        BomReport::Stripped { bytes } => println!("BOM:        {bytes} (stripped)"),
        BomReport::Ignored => println!("BOM:        not checked (--ignore-bom)"),
        BomReport::Absent => println!("BOM:        none"),
    }
    println!(
        "Characters: {} decoded, {} malformed",
        report.characters, report.malformed
    );

    if !report.spans.is_empty() {
        println!("Malformed spans:");
        for span in &report.spans {
            let kind = match span.kind {
                SpanKind::Invalid => "invalid",
                SpanKind::Truncated => "truncated",
            };
            println!(
                "  offset {:<6} len {:<2} {:<10} {kind}",
                span.offset, span.len, span.bytes
            );
        }
        if report.malformed > report.spans.len() {
            println!("  … {} more", report.malformed - report.spans.len());
        }
    }

    Ok(())
}

/// Classify the whole input, keeping the first `limit` malformed spans.
///
/// Offsets are absolute positions in `bytes`, byte order mark included.
fn build_report(encoding: Encoding, bytes: &[u8], ignore_bom: bool, limit: usize) -> Report {
    let mut pos = 0;

    let bom = if ignore_bom {
        BomReport::Ignored
    } else if let BomMatch::Found(len) = encoding.match_bom(bytes) {
        pos = len;
        BomReport::Stripped {
            bytes: hex::encode(&bytes[..len]),
        }
    } else {
        BomReport::Absent
    };

    let mut characters = 0;
    let mut malformed = 0;
    let mut spans = Vec::new();

    while pos < bytes.len() {
        let sequence = encoding.classify(&bytes[pos..]);
        let len = sequence.consumed();

        let kind = match sequence {
            Sequence::Ascii(_) | Sequence::Valid { .. } => {
                characters += 1;
                None
            }
            Sequence::Invalid { .. } => Some(SpanKind::Invalid),
            Sequence::Incomplete { .. } => Some(SpanKind::Truncated),
        };

        if let Some(kind) = kind {
            malformed += 1;
            if spans.len() < limit {
                spans.push(Span {
                    offset: pos,
                    len,
                    bytes: hex::encode(&bytes[pos..pos + len]),
                    kind,
                });
            }
        }

        pos += len;
    }

    Report {
        encoding: encoding.name(),
        bytes: bytes.len(),
        bom,
        characters,
        malformed,
        spans,
    }
}
