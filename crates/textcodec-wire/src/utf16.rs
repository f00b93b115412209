use crate::sequence::Sequence;

/// Size of one UTF-16 code unit in bytes.
pub const UNIT_LEN: usize = 2;

/// Longest well-formed UTF-16 sequence in bytes (a surrogate pair).
pub const MAX_SEQUENCE_LEN: usize = 4;

/// Leading (high) surrogate code units.
pub const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;

/// Trailing (low) surrogate code units.
pub const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Byte order of a 16-bit code unit on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Assemble one code unit from its two wire bytes.
    #[must_use]
    pub fn read_unit(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }
}

/// Classify the UTF-16 sequence at the front of `buf`.
///
/// ```text
///   first unit        second unit        result
///   ───────────────   ───────────────    ─────────────────────────
///   (< 2 bytes)       —                  Incomplete { len }
///   non-surrogate     —                  Valid { len: 2 }
///   DC00..=DFFF       —                  Invalid { len: 2 }   lone low
///   D800..=DBFF       (< 2 bytes)        Incomplete { len }
///   D800..=DBFF       DC00..=DFFF        Valid { len: 4 }     pair
///   D800..=DBFF       anything else      Invalid { len: 2 }   lone high
/// ```
///
/// A lone high surrogate consumes only its own unit, so the unit that
/// followed it is classified afresh.
#[must_use]
pub fn classify(buf: &[u8], order: ByteOrder) -> Sequence {
    let Some(unit) = read_unit_at(buf, 0, order) else {
        return Sequence::Incomplete { len: buf.len() };
    };

    if LOW_SURROGATES.contains(&unit) {
        return Sequence::Invalid { len: UNIT_LEN };
    }

    if !HIGH_SURROGATES.contains(&unit) {
        return match char::from_u32(u32::from(unit)) {
            Some(ch) => Sequence::Valid { ch, len: UNIT_LEN },
            None => Sequence::Invalid { len: UNIT_LEN },
        };
    }

    let Some(trail) = read_unit_at(buf, UNIT_LEN, order) else {
        return Sequence::Incomplete { len: buf.len() };
    };

    if !LOW_SURROGATES.contains(&trail) {
        return Sequence::Invalid { len: UNIT_LEN };
    }

    match char::from_u32(combine_surrogates(unit, trail)) {
        Some(ch) => Sequence::Valid {
            ch,
            len: MAX_SEQUENCE_LEN,
        },
        None => Sequence::Invalid {
            len: MAX_SEQUENCE_LEN,
        },
    }
}

/// Combine a high and a low surrogate into a supplementary code point.
#[must_use]
pub fn combine_surrogates(high: u16, low: u16) -> u32 {
    0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
}

fn read_unit_at(buf: &[u8], offset: usize, order: ByteOrder) -> Option<u16> {
    let bytes = buf.get(offset..offset + UNIT_LEN)?;
    Some(order.read_unit([bytes[0], bytes[1]]))
}
