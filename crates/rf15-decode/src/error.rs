/// Errors that can occur while decoding a captured frame.
///
/// Every variant is an expected, per-frame condition: a batch caller skips
/// the bad frame and moves on. No stage recovers from another stage's
/// failure, and the decode facade propagates these unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The alternating preamble could not be located, or the bitstream is
    /// malformed or too short to realign.
    #[error("no usable preamble in bitstream")]
    Preamble,

    /// A de-framed byte did not match the sync word.
    #[error("sync word mismatch at byte {index}")]
    Sync { index: usize },

    /// The stop byte was never found, or the packet ended while a fixed
    /// field remained unread.
    #[error("end of packet reached before the frame was complete")]
    EndOfPacket,

    /// A frame byte is not one of the 16 valid Manchester symbols.
    #[error("invalid manchester symbol {symbol:#04x}")]
    Manchester { symbol: u8 },

    /// The decoded bytes do not sum to zero modulo 256.
    #[error("checksum mismatch (residue {sum:#04x})")]
    Checksum { sum: u8 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
