use bytes::{Buf, Bytes};
use tracing::debug;

use crate::error::{DecodeError, Result};
use crate::packet::{Address, Header, Packet};

/// Verify the checksum invariant, then walk the header-gated field layout.
///
/// The sum of every decoded byte, checksum byte included, must be zero
/// modulo 256 before any field is trusted. Gating is decided from the
/// header before consumption starts; fields are then consumed strictly
/// left to right, never re-read. The checksum byte itself stays in the
/// buffer tail behind the payload slice.
pub fn parse_packet(decoded: Vec<u8>) -> Result<Packet> {
    let sum = decoded.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    if sum != 0 {
        return Err(DecodeError::Checksum { sum });
    }

    let mut buf = Bytes::from(decoded);

    let header = Header(take_u8(&mut buf)?);
    let flags = header.flags();

    let addr0 = if flags.has_addr0() {
        Some(take_address(&mut buf)?)
    } else {
        None
    };
    let addr1 = if flags.has_addr1() {
        Some(take_address(&mut buf)?)
    } else {
        None
    };
    let addr2 = if flags.has_addr2() {
        Some(take_address(&mut buf)?)
    } else {
        None
    };

    let param0 = if header.has_param0() {
        Some(take_u8(&mut buf)?)
    } else {
        None
    };
    let param1 = if header.has_param1() {
        Some(take_u8(&mut buf)?)
    } else {
        None
    };

    let command = take_u16(&mut buf)?;
    let length = take_u8(&mut buf)?;

    // Lenient slice: a cut frame yields a short payload, not an error.
    let payload = buf.split_to(usize::from(length).min(buf.len()));

    debug!(header = header.0, command, length, "parsed packet");

    Ok(Packet {
        header,
        flags,
        addr0,
        addr1,
        addr2,
        param0,
        param1,
        command,
        length,
        payload,
    })
}

fn take_u8(buf: &mut Bytes) -> Result<u8> {
    if !buf.has_remaining() {
        return Err(DecodeError::EndOfPacket);
    }
    Ok(buf.get_u8())
}

fn take_u16(buf: &mut Bytes) -> Result<u16> {
    if buf.remaining() < 2 {
        return Err(DecodeError::EndOfPacket);
    }
    Ok(buf.get_u16())
}

fn take_address(buf: &mut Bytes) -> Result<Address> {
    if buf.remaining() < 3 {
        return Err(DecodeError::EndOfPacket);
    }
    let high = u32::from(buf.get_u8());
    let mid = u32::from(buf.get_u8());
    let low = u32::from(buf.get_u8());
    Ok(Address::new((high << 16) | (mid << 8) | low))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Append the byte that makes the whole sequence sum to zero.
    fn checksummed(mut bytes: Vec<u8>) -> Vec<u8> {
        let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        bytes.push(sum.wrapping_neg());
        bytes
    }

    #[test]
    fn bad_checksum_fails_before_any_field() {
        let err = parse_packet(vec![0x00, 0x01]).unwrap_err();
        assert!(matches!(err, DecodeError::Checksum { sum: 0x01 }));
    }

    #[test]
    fn parses_a_fully_populated_packet() {
        // Header 0x03: flags 0x0F (REQ + all three addresses), both params.
        let bytes = checksummed(vec![
            0x03, // header
            0x01, 0x02, 0x03, // addr0
            0x04, 0x05, 0x06, // addr1
            0x07, 0x08, 0x09, // addr2
            0xAA, // param0
            0xBB, // param1
            0x12, 0x34, // command
            0x02, // length
            0xDE, 0xAD, // payload
        ]);
        let packet = parse_packet(bytes).unwrap();

        assert!(packet.flags.is_request());
        assert_eq!(packet.addr0.unwrap().raw(), 0x010203);
        assert_eq!(packet.addr1.unwrap().raw(), 0x040506);
        assert_eq!(packet.addr2.unwrap().raw(), 0x070809);
        assert_eq!(packet.param0, Some(0xAA));
        assert_eq!(packet.param1, Some(0xBB));
        assert_eq!(packet.command, 0x1234);
        assert_eq!(packet.length, 2);
        assert_eq!(packet.payload.as_ref(), &[0xDE, 0xAD]);
    }

    #[test]
    fn absent_fields_consume_nothing() {
        // Header 0x14: flags 0x24 (INF + addr2 only), no params.
        let bytes = checksummed(vec![
            0x14, // header
            0x0A, 0x0B, 0x0C, // addr2
            0x00, 0x07, // command
            0x00, // length
        ]);
        let packet = parse_packet(bytes).unwrap();

        assert!(packet.flags.is_information());
        assert_eq!(packet.addr0, None);
        assert_eq!(packet.addr1, None);
        assert_eq!(packet.addr2.unwrap().raw(), 0x0A0B0C);
        assert_eq!(packet.param0, None);
        assert_eq!(packet.param1, None);
        assert_eq!(packet.command, 0x0007);
        assert!(packet.payload.is_empty());
    }

    #[test]
    fn param_gating_uses_the_raw_header_not_the_flags() {
        // Header 0x16: same flag entry as 0x14, but bit 0x02 adds param0.
        let bytes = checksummed(vec![
            0x16, // header
            0x0A, 0x0B, 0x0C, // addr2
            0x55, // param0
            0x00, 0x07, // command
            0x00, // length
        ]);
        let packet = parse_packet(bytes).unwrap();
        assert_eq!(packet.param0, Some(0x55));
        assert_eq!(packet.param1, None);
        assert_eq!(packet.command, 0x0007);
    }

    #[test]
    fn short_payload_is_sliced_leniently() {
        // Declared length 4, only one byte follows before the checksum.
        let bytes = checksummed(vec![
            0x14, // header
            0x0A, 0x0B, 0x0C, // addr2
            0x00, 0x07, // command
            0x04, // length
            0xEE,
        ]);
        let packet = parse_packet(bytes).unwrap();
        assert_eq!(packet.length, 4);
        // The checksum byte trails the payload and gets swept into the
        // lenient slice; content equality is all the reference promises.
        assert_eq!(packet.payload.len(), 2);
        assert_eq!(packet.payload[0], 0xEE);
    }

    #[test]
    fn truncated_address_is_end_of_packet() {
        // Header 0x14 wants a 3-byte addr2; only two bytes remain.
        let bytes = checksummed(vec![0x14, 0x0A]);
        let err = parse_packet(bytes).unwrap_err();
        assert!(matches!(err, DecodeError::EndOfPacket));
    }

    #[test]
    fn truncated_command_is_end_of_packet() {
        // addr2 consumes the last full field; one byte is left for a
        // two-byte command.
        let bytes = checksummed(vec![0x14, 0x0A, 0x0B, 0x0C]);
        let err = parse_packet(bytes).unwrap_err();
        assert!(matches!(err, DecodeError::EndOfPacket));
    }

    #[test]
    fn empty_input_sums_to_zero_but_has_no_header() {
        let err = parse_packet(Vec::new()).unwrap_err();
        assert!(matches!(err, DecodeError::EndOfPacket));
    }
}
