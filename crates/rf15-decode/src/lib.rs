//! Link-layer frame decoder for the RF15 short-range radio protocol.
//!
//! A captured bitstream passes through four stages, each of which either
//! produces the next intermediate value or fails with a specific
//! [`DecodeError`]:
//!
//! 1. Bit synchronization: train on the alternating preamble, realign to
//!    the 10-bit byte framing, strip start/stop bits, fix bit order.
//! 2. Frame extraction: check the 5-byte sync word, cut at the stop byte.
//! 3. Manchester decoding: map symbol pairs back to data bytes.
//! 4. Packet parsing: verify the rolling checksum, then walk the
//!    header-gated field layout.
//!
//! [`decode`] composes the stages. Every call is pure and self-contained:
//! no state survives between decodes, so independent frames may be decoded
//! concurrently without coordination.

pub mod bits;
pub mod bitsync;
pub mod error;
pub mod frame;
pub mod manchester;
pub mod packet;
pub mod parse;
pub mod report;

pub use bits::Bits;
pub use bitsync::RAW_BYTE_LENGTH;
pub use error::{DecodeError, Result};
pub use frame::{STOP_BYTE, SYNC_WORD};
pub use packet::{Address, Header, Packet, PacketFlags, HEADER_FLAGS};
pub use report::report_line;

/// Decode one captured frame from a '0'/'1' bit-string.
pub fn decode(raw: &str) -> Result<Packet> {
    decode_bits(&Bits::from_binary_str(raw)?)
}

/// Decode one captured frame from an already-materialized bit sequence.
pub fn decode_bits(bits: &Bits) -> Result<Packet> {
    let framed = bitsync::synchronize(bits)?;
    let body = frame::extract(&framed)?;
    let decoded = manchester::decode(&body)?;
    parse::parse_packet(decoded)
}
