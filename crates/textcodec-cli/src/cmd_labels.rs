/// Implementation of `textcodec labels`.
///
/// ```text
/// utf-8      "", unicode-1-1-utf-8, unicode11utf8, ...
/// utf-16le   csunicode, iso-10646-ucs-2, ucs-2, ...
/// utf-16be   unicodefffe, utf-16be
/// ```
use anyhow::Result;
use textcodec_types::Encoding;

/// Run the `textcodec labels` command.
///
/// # Errors
///
/// Never fails; returns `Result` for uniformity with the other commands.
#[allow(clippy::unnecessary_wraps)]
pub fn run() -> Result<()> {
    for encoding in Encoding::ALL {
        let labels: Vec<String> = encoding
            .labels()
            .map(|label| {
                if label.is_empty() {
                    "\"\"".to_string()
                } else {
                    label.to_string()
                }
            })
            .collect();
        println!("{:<10} {}", encoding.name(), labels.join(", "));
    }
    Ok(())
}
