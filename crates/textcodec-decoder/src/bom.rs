use textcodec_types::Encoding;
use textcodec_wire::BomMatch;

/// What to do about a possible byte order mark at the start of a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BomDecision {
    /// Drop this many leading bytes without producing a character.
    Strip(usize),

    /// Decode the leading bytes as ordinary input.
    Keep,

    /// Not enough bytes to tell yet; hold everything for the next call.
    Defer,
}

/// Decide the byte order mark question for the first bytes of a stream.
///
/// ```text
///   ignore_bom   front of buffer    stream   decision
///   ──────────   ────────────────   ──────   ─────────
///   true         anything           any      Keep
///   false        full mark          any      Strip(n)
///   false        prefix of a mark   true     Defer
///   false        prefix of a mark   false    Keep
///   false        no mark            any      Keep
/// ```
///
/// An empty buffer counts as a prefix of every mark. The encoding is
/// never changed by what is found here.
pub(crate) fn resolve(
    encoding: Encoding,
    ignore_bom: bool,
    working: &[u8],
    stream: bool,
) -> BomDecision {
    if ignore_bom {
        return BomDecision::Keep;
    }

    match encoding.match_bom(working) {
        BomMatch::Found(len) => BomDecision::Strip(len),
        BomMatch::Partial if stream => BomDecision::Defer,
        BomMatch::Partial | BomMatch::Absent => BomDecision::Keep,
    }
}
