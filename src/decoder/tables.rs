// Tables from the PDF417 symbology specification (security levels 0-8).

/// Number of PDF417 security levels
pub const EC_LEVEL_COUNT: u8 = 9;

/// Maximum number of codewords a single symbol can carry
pub const MAX_CODEWORDS: usize = 928;

/// Number of error correction codewords reserved at a security level,
/// or `None` for an invalid level. Level `l` reserves `2^(l+1)` codewords.
pub fn ec_codeword_count(level: u8) -> Option<usize> {
    if level >= EC_LEVEL_COUNT {
        return None;
    }
    Some(1usize << (level + 1))
}

/// Minimum recommended security level for a symbol holding
/// `data_codewords` data codewords, or `None` when the count cannot fit
/// in a symbol.
pub fn recommended_level(data_codewords: usize) -> Option<u8> {
    match data_codewords {
        0 => None,
        1..=40 => Some(2),
        41..=160 => Some(3),
        161..=320 => Some(4),
        321..=863 => Some(5),
        _ => None,
    }
}
