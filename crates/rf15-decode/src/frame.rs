use crate::error::{DecodeError, Result};

/// The 5-byte sync word opening every frame.
pub const SYNC_WORD: [u8; 5] = [0xFF, 0x00, 0x33, 0x55, 0x53];

/// Sentinel byte marking the end of meaningful frame content.
pub const STOP_BYTE: u8 = 0x35;

/// Validate the sync word and trim the frame to the bytes between it and
/// the stop byte.
///
/// Everything from the stop byte on is receiver noise and is discarded. A
/// frame whose stop byte never arrives was cut short, not framed.
pub fn extract(framed: &[u8]) -> Result<Vec<u8>> {
    for (index, &expected) in SYNC_WORD.iter().enumerate() {
        match framed.get(index) {
            Some(&byte) if byte == expected => {}
            _ => return Err(DecodeError::Sync { index }),
        }
    }

    let body = &framed[SYNC_WORD.len()..];
    let stop = body
        .iter()
        .position(|&byte| byte == STOP_BYTE)
        .ok_or(DecodeError::EndOfPacket)?;

    Ok(body[..stop].to_vec())
}
