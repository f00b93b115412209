use crate::sequence::Sequence;

/// Longest well-formed UTF-8 sequence in bytes.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// Classify the UTF-8 sequence at the front of `buf`.
///
/// The lead byte fixes how many continuation bytes follow and the
/// accepted range of the *first* continuation byte. Every later
/// continuation byte must be in `0x80..=0xBF`.
///
/// | Lead        | Total | 1st continuation | Excludes                  |
/// |-------------|-------|------------------|---------------------------|
/// | `00..=7F`   | 1     | —                | —                         |
/// | `C2..=DF`   | 2     | `80..=BF`        | —                         |
/// | `E0`        | 3     | `A0..=BF`        | overlong 3-byte forms     |
/// | `E1..=EC`   | 3     | `80..=BF`        | —                         |
/// | `ED`        | 3     | `80..=9F`        | surrogates D800..DFFF     |
/// | `EE..=EF`   | 3     | `80..=BF`        | —                         |
/// | `F0`        | 4     | `90..=BF`        | overlong 4-byte forms     |
/// | `F1..=F3`   | 4     | `80..=BF`        | —                         |
/// | `F4`        | 4     | `80..=8F`        | code points above 10FFFF  |
/// | `80..=C1`, `F5..=FF` | invalid on their own                       |
///
/// When a byte falls outside its allowed range, the result is
/// `Invalid` covering only the bytes *before* it (at least the lead
/// byte). That offending byte is left for the next call so it can
/// start a sequence of its own.
///
/// An empty buffer yields `Incomplete { len: 0 }`.
#[must_use]
pub fn classify(buf: &[u8]) -> Sequence {
    let Some(&lead) = buf.first() else {
        return Sequence::Incomplete { len: 0 };
    };

    let (continuations, lower, upper, mask) = match lead {
        0x00..=0x7F => return Sequence::Ascii(lead),
        0xC2..=0xDF => (1, 0x80, 0xBF, 0x1F),
        0xE0 => (2, 0xA0, 0xBF, 0x0F),
        0xE1..=0xEC | 0xEE..=0xEF => (2, 0x80, 0xBF, 0x0F),
        0xED => (2, 0x80, 0x9F, 0x0F),
        0xF0 => (3, 0x90, 0xBF, 0x07),
        0xF1..=0xF3 => (3, 0x80, 0xBF, 0x07),
        0xF4 => (3, 0x80, 0x8F, 0x07),
        _ => return Sequence::Invalid { len: 1 },
    };

    let mut code_point = u32::from(lead & mask);

    for i in 1..=continuations {
        let Some(&byte) = buf.get(i) else {
            return Sequence::Incomplete { len: i };
        };

        let (lo, hi) = if i == 1 { (lower, upper) } else { (0x80, 0xBF) };
        if !(lo..=hi).contains(&byte) {
            return Sequence::Invalid { len: i };
        }

        code_point = (code_point << 6) | u32::from(byte & 0x3F);
    }

    let len = continuations + 1;
    match char::from_u32(code_point) {
        Some(ch) => Sequence::Valid { ch, len },
        None => Sequence::Invalid { len },
    }
}

/// Returns `true` if `byte` matches the continuation pattern `10xxxxxx`.
#[must_use]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

// Bit layout refresher for the lead bytes above:
//   0xxxxxxx → 1 byte, 7 payload bits
//   110xxxxx → 2 bytes, 5 + 6 payload bits
//   1110xxxx → 3 bytes, 4 + 6 + 6
//   11110xxx → 4 bytes, 3 + 6 + 6 + 6
// The `mask` column strips the length marker off the lead byte, and
// `byte & 0x3F` strips the `10` marker off each continuation byte.
// C0 and C1 could only ever encode U+0000..U+007F in two bytes, which
// is an overlong form, so they never start a valid sequence.
