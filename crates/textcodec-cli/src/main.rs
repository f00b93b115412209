/// Text codec command-line tool: decode, encode, validate and inspect
/// UTF-8 / UTF-16 byte streams.
///
/// # Command overview
///
/// ```text
/// textcodec <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode a byte stream to UTF-8 text, chunk by chunk
///   encode     Encode text (or raw UTF-16 code units) as UTF-8
///   validate   Check that a byte stream decodes without error
///   inspect    Report the byte order mark and every malformed span
///   labels     List supported encodings and their labels
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log decoder activity to stderr (debug level)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                          |
/// |------|--------------------------------------------------|
/// | 0    | Success                                          |
/// | 1    | Error (I/O failure, unknown label, fatal decode) |
///
/// Logs and error details go to stderr so stdout can be piped cleanly.
/// `RUST_LOG` overrides the log filter chosen by `--verbose`.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_labels;
mod cmd_validate;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Incremental UTF-8 / UTF-16 text codec.
#[derive(Parser)]
#[command(name = "textcodec", version, about = "UTF-8 / UTF-16 text codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a byte stream to UTF-8 text.
    Decode(DecodeArgs),
    /// Encode text as UTF-8 bytes.
    Encode(EncodeArgs),
    /// Check that a byte stream decodes without error.
    Validate(ValidateArgs),
    /// Report the byte order mark and malformed spans of a byte stream.
    Inspect(InspectArgs),
    /// List supported encodings and the labels that select them.
    Labels,
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `textcodec decode`.
///
/// The input is read `--chunk-size` bytes at a time and each chunk is fed
/// to one streaming decoder, so the output does not depend on where the
/// chunk boundaries fall.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                               │
/// ├──────────────┼──────────────────────────────────────────────────────┤
/// │ --label      │ encoding label (default utf-8)                       │
/// │ --fatal      │ fail on the first malformed span instead of U+FFFD   │
/// │ --ignore-bom │ keep a leading byte order mark as U+FEFF             │
/// │ --options    │ JSON options, e.g. '{"fatal":true,"ignoreBOM":true}' │
/// │ --chunk-size │ bytes per read (default 8192)                        │
/// │ -o/--output  │ write to file instead of stdout                      │
/// └──────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// `--fatal` and `--ignore-bom` are OR-ed with the JSON options.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Input file, or `-` for stdin.
    pub file: PathBuf,

    /// Encoding label.
    #[arg(short, long, default_value = "utf-8")]
    pub label: String,

    /// Fail on malformed input.
    #[arg(long)]
    pub fatal: bool,

    /// Do not strip a leading byte order mark.
    #[arg(long)]
    pub ignore_bom: bool,

    /// Decoder options as a JSON object.
    #[arg(long)]
    pub options: Option<String>,

    /// Number of bytes read per chunk.
    #[arg(long, default_value_t = 8192, value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_size: u32,

    /// Write decoded text to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `textcodec encode`.
///
/// Text comes from `--text`, or from a file that must be valid UTF-8.
/// With `--from-utf16 le|be` the file is instead read as raw 16-bit code
/// units, and any unpaired surrogate is written as U+FFFD.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Input file, or `-` for stdin.
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Encode this string instead of reading a file.
    #[arg(long)]
    pub text: Option<String>,

    /// Treat the input file as UTF-16 code units in this byte order.
    #[arg(long, value_name = "le|be", conflicts_with = "text")]
    pub from_utf16: Option<String>,

    /// Write bytes to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `textcodec validate`.
///
/// Decodes the whole input with a fatal decoder. Exits with code 0 when
/// the input is well formed and code 1 at the first malformed span.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Input file, or `-` for stdin.
    pub file: PathBuf,

    /// Encoding label.
    #[arg(short, long, default_value = "utf-8")]
    pub label: String,

    /// Treat a leading byte order mark as content.
    #[arg(long)]
    pub ignore_bom: bool,
}

/// Arguments for `textcodec inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Input file, or `-` for stdin.
    pub file: PathBuf,

    /// Encoding label.
    #[arg(short, long, default_value = "utf-8")]
    pub label: String,

    /// Treat a leading byte order mark as content.
    #[arg(long)]
    pub ignore_bom: bool,

    /// List at most this many malformed spans.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Labels => cmd_labels::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins when set.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
