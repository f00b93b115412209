/// UTF-8 byte order mark.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// UTF-16 little-endian byte order mark.
pub const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// UTF-16 big-endian byte order mark.
pub const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Every mark recognised in front of a 16-bit stream.
pub const UTF16_BOMS: [&[u8]; 2] = [&UTF16LE_BOM, &UTF16BE_BOM];

/// Outcome of matching the front of a buffer against byte order marks.
///
/// ```text
///   buffer        signature     result
///   ───────────   ───────────   ─────────────
///   EF BB BF 48   EF BB BF      Found(3)
///   EF BB         EF BB BF      Partial        ← need more bytes
///   (empty)       EF BB BF      Partial
///   EF 48         EF BB BF      Absent
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BomMatch {
    /// A complete mark of this many bytes sits at the front.
    Found(usize),

    /// The buffer is a strict prefix of a mark; the answer depends on
    /// bytes not seen yet.
    Partial,

    /// No mark can be present.
    Absent,
}

/// Match the front of `buf` against a set of candidate signatures.
///
/// A full match wins over a partial one, and the first full match in
/// `signatures` order is reported.
#[must_use]
pub fn match_signatures(buf: &[u8], signatures: &[&[u8]]) -> BomMatch {
    if let Some(sig) = signatures.iter().find(|sig| buf.starts_with(sig)) {
        return BomMatch::Found(sig.len());
    }

    if signatures
        .iter()
        .any(|sig| buf.len() < sig.len() && sig.starts_with(buf))
    {
        BomMatch::Partial
    } else {
        BomMatch::Absent
    }
}

/// Match the UTF-8 mark.
#[must_use]
pub fn match_utf8(buf: &[u8]) -> BomMatch {
    match_signatures(buf, &[&UTF8_BOM])
}

/// Match either UTF-16 mark, regardless of which byte order the
/// stream was configured with.
#[must_use]
pub fn match_utf16(buf: &[u8]) -> BomMatch {
    match_signatures(buf, &UTF16_BOMS)
}
