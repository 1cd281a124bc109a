use tracing::trace;

use crate::bits::Bits;
use crate::error::{DecodeError, Result};

/// Length of one raw framed unit: 1 start bit + 8 data bits + 1 stop bit.
pub const RAW_BYTE_LENGTH: usize = 10;

/// Recover byte alignment from the alternating preamble and strip the
/// per-byte start/stop framing.
///
/// The receiver clock trains on an alternating 0/1 run. The first index at
/// which two consecutive bits are equal falls on the second data bit of the
/// first framed sync byte (its data opens 1,1), so dropping `counter - 2`
/// bits lands the stream exactly on that byte's start bit. Each 10-bit unit
/// then carries its 8 data bits LSB-first between the start and stop bits;
/// the logical byte is MSB-first.
pub fn synchronize(bits: &Bits) -> Result<Vec<u8>> {
    let stream = bits.as_slice();
    if stream.is_empty() {
        return Err(DecodeError::Preamble);
    }

    // counter = first index where the alternation from bit 0 breaks.
    let mut expected = stream[0];
    let mut counter = 0usize;
    while counter < stream.len() && stream[counter] == expected {
        expected = !expected;
        counter += 1;
    }
    if counter >= stream.len() {
        // The whole capture alternates: preamble with no frame behind it.
        return Err(DecodeError::Preamble);
    }
    if counter < 2 {
        return Err(DecodeError::Preamble);
    }

    let aligned = &stream[counter - 2..];
    if aligned.len() < RAW_BYTE_LENGTH {
        return Err(DecodeError::Preamble);
    }

    // Complete 10-bit units only; a trailing partial unit is noise past the
    // stop byte and never carries frame content.
    let mut bytes = Vec::with_capacity(aligned.len() / RAW_BYTE_LENGTH);
    for chunk in aligned.chunks_exact(RAW_BYTE_LENGTH) {
        let mut byte = 0u8;
        for (i, &bit) in chunk[1..9].iter().enumerate() {
            if bit {
                byte |= 1 << i;
            }
        }
        bytes.push(byte);
    }

    trace!(raw = %raw_bit_string(&bytes), "bit-synchronized stream");

    Ok(bytes)
}

fn raw_bit_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:08b}")).collect()
}
