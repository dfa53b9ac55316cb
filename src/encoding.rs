/// Byte stream normalisation ahead of layout.
///
/// Text arrives as UTF-8. Latin-1 supplement characters are two bytes, a
/// 0xC2/0xC3 lead byte and a continuation byte; dropping the lead byte and
/// shifting most continuation bytes up by 64 lands on the matching single
/// byte code in the font. The degree sign (176) keeps its value.

const LEAD_BYTES: [u8; 2] = [0xC2, 0xC3];

pub fn is_lead_byte(byte: u8) -> bool {
    LEAD_BYTES.contains(&byte)
}

/// Shift continuation bytes in 132..=190, except 176, up by 64.
pub fn fold(byte: u8) -> u8 {
    if byte > 131 && byte < 191 && byte != 176 {
        byte + 64
    } else {
        byte
    }
}

/// Character codes for a byte stream, lead bytes removed and folded.
pub fn codes(bytes: &[u8]) -> impl Iterator<Item = u8> + '_ {
    bytes
        .iter()
        .copied()
        .filter(|&b| !is_lead_byte(b))
        .map(fold)
}
