use bytes::Bytes;

/// Flag table indexed by the header byte's bits 2–5.
///
/// Each entry packs the packet type bits (0x20 information, 0x08 request,
/// 0x10 response, 0x40 write) together with the presence bits for the three
/// optional address fields (0x01/0x02/0x04).
pub const HEADER_FLAGS: [u8; 16] = [
    0x0F, 0x0C, 0x0D, 0x0B, 0x27, 0x24, 0x25, 0x23, 0x47, 0x44, 0x45, 0x43, 0x17, 0x14, 0x15,
    0x13,
];

/// The raw header byte of a frame.
///
/// Bits 2–5 select an entry in [`HEADER_FLAGS`]; the low two bits gate the
/// parameter fields directly, without going through the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header(pub u8);

impl Header {
    /// Look up the flag byte for this header.
    pub fn flags(self) -> PacketFlags {
        PacketFlags(HEADER_FLAGS[usize::from((self.0 >> 2) & 0x0F)])
    }

    pub fn has_param0(self) -> bool {
        self.0 & 0x02 != 0
    }

    pub fn has_param1(self) -> bool {
        self.0 & 0x01 != 0
    }
}

/// Packet type and address-presence bits looked up from [`HEADER_FLAGS`].
///
/// The type bits are independently testable; a frame can legitimately carry
/// more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketFlags(pub u8);

impl PacketFlags {
    pub fn is_information(self) -> bool {
        self.0 & 0x20 != 0
    }

    pub fn is_request(self) -> bool {
        self.0 & 0x08 != 0
    }

    pub fn is_response(self) -> bool {
        self.0 & 0x10 != 0
    }

    pub fn is_write(self) -> bool {
        self.0 & 0x40 != 0
    }

    pub fn has_addr0(self) -> bool {
        self.0 & 0x01 != 0
    }

    pub fn has_addr1(self) -> bool {
        self.0 & 0x02 != 0
    }

    pub fn has_addr2(self) -> bool {
        self.0 & 0x04 != 0
    }
}

/// A 24-bit device address: a 6-bit group id over an 18-bit device id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(u32);

impl Address {
    pub fn new(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }

    /// The full 24-bit value as carried on the wire.
    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn group(self) -> u8 {
        ((self.0 >> 18) & 0x3F) as u8
    }

    pub fn device(self) -> u32 {
        self.0 & 0x3FFFF
    }
}

/// A fully decoded packet. Immutable once built; each decode call produces
/// a fresh value and no decoder state survives between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// The raw header byte.
    pub header: Header,
    /// Flags looked up from the header.
    pub flags: PacketFlags,
    /// Optional address fields, in wire order.
    pub addr0: Option<Address>,
    pub addr1: Option<Address>,
    pub addr2: Option<Address>,
    /// Optional parameter bytes, gated by the raw header's low bits.
    pub param0: Option<u8>,
    pub param1: Option<u8>,
    /// 16-bit command code, high byte first on the wire.
    pub command: u16,
    /// Declared payload length.
    pub length: u8,
    /// Payload bytes; shorter than `length` only when the frame was cut.
    pub payload: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_high_bits_select_the_flag_entry() {
        assert_eq!(Header(0x00).flags(), PacketFlags(0x0F));
        assert_eq!(Header(0x04).flags(), PacketFlags(0x0C));
        assert_eq!(Header(0x3C).flags(), PacketFlags(0x13));
        // The low two bits never affect the lookup.
        assert_eq!(Header(0x07).flags(), Header(0x04).flags());
    }

    #[test]
    fn param_gating_reads_the_raw_header() {
        assert!(Header(0x02).has_param0());
        assert!(!Header(0x02).has_param1());
        assert!(Header(0x01).has_param1());
        assert!(!Header(0x01).has_param0());
    }

    #[test]
    fn type_bits_are_independent() {
        let flags = PacketFlags(0x20 | 0x10);
        assert!(flags.is_information());
        assert!(flags.is_response());
        assert!(!flags.is_request());
        assert!(!flags.is_write());
    }

    #[test]
    fn address_presence_bits() {
        let flags = PacketFlags(0x05);
        assert!(flags.has_addr0());
        assert!(!flags.has_addr1());
        assert!(flags.has_addr2());
    }

    #[test]
    fn address_splits_into_group_and_device() {
        let addr = Address::new(0x00FF_FFFF);
        assert_eq!(addr.group(), 0x3F);
        assert_eq!(addr.device(), 0x3FFFF);

        let addr = Address::new(0x0004_0001);
        assert_eq!(addr.group(), 1);
        assert_eq!(addr.device(), 1);
    }

    #[test]
    fn address_masks_to_24_bits() {
        assert_eq!(Address::new(0xFF12_3456).raw(), 0x0012_3456);
    }
}
