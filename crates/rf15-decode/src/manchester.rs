use crate::error::{DecodeError, Result};

/// The 16 valid Manchester symbols; a symbol's position is the nibble it
/// decodes to.
pub const SYMBOLS: [u8; 16] = [
    0xAA, 0xA9, 0xA6, 0xA5, 0x9A, 0x99, 0x96, 0x95, 0x6A, 0x69, 0x66, 0x65, 0x5A, 0x59, 0x56,
    0x55,
];

/// Decode pairs of Manchester symbols back into data bytes.
///
/// The first symbol of a pair carries the high nibble, the second the low
/// nibble. A dangling symbol at the end is dropped: earlier stages only
/// produce one when the frame body was truncated mid-byte.
pub fn decode(symbols: &[u8]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(symbols.len() / 2);
    for pair in symbols.chunks_exact(2) {
        let high = nibble(pair[0])?;
        let low = nibble(pair[1])?;
        bytes.push((high << 4) | low);
    }
    Ok(bytes)
}

fn nibble(symbol: u8) -> Result<u8> {
    SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|i| i as u8)
        .ok_or(DecodeError::Manchester { symbol })
}
