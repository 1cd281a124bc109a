use crate::packet::{Address, Packet};

/// Render the single-line receiver-log report for a packet.
///
/// Type markers come first (a frame can carry several), then the three
/// address columns, the two parameter columns, the command, the length,
/// and the payload as bare uppercase hex. Absent optional fields print
/// fixed-width placeholders so columns stay aligned across a batch.
pub fn report_line(packet: &Packet) -> String {
    let mut line = String::new();

    if packet.flags.is_information() {
        line.push_str("--- INF --- ");
    }
    if packet.flags.is_request() {
        line.push_str("--- REQ --- ");
    }
    if packet.flags.is_response() {
        line.push_str("--- RSP --- ");
    }
    if packet.flags.is_write() {
        line.push_str("--- WRT --- ");
    }

    push_address(&mut line, packet.addr0);
    push_address(&mut line, packet.addr1);
    push_address(&mut line, packet.addr2);
    push_param(&mut line, packet.param0);
    push_param(&mut line, packet.param1);

    line.push_str(&format!("0x{:04X} {:03} ", packet.command, packet.length));
    for byte in packet.payload.iter() {
        line.push_str(&format!("{byte:02X}"));
    }

    line
}

fn push_address(line: &mut String, address: Option<Address>) {
    match address {
        Some(addr) => line.push_str(&format!("{:02}:{:06} ", addr.group(), addr.device())),
        None => line.push_str("--:------ "),
    }
}

fn push_param(line: &mut String, param: Option<u8>) {
    match param {
        Some(value) => line.push_str(&format!("{value:03} ")),
        None => line.push_str("--- "),
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::packet::{Header, Packet, PacketFlags};

    fn base_packet() -> Packet {
        Packet {
            header: Header(0x14),
            flags: PacketFlags(0x24),
            addr0: None,
            addr1: None,
            addr2: Some(Address::new(0x0004_0001)),
            param0: None,
            param1: None,
            command: 0x0007,
            length: 2,
            payload: Bytes::from_static(&[0xDE, 0xAD]),
        }
    }

    #[test]
    fn formats_present_and_absent_columns() {
        let line = report_line(&base_packet());
        assert_eq!(
            line,
            "--- INF --- --:------ --:------ 01:000001 --- --- 0x0007 002 DEAD"
        );
    }

    #[test]
    fn multiple_type_markers_print_in_order() {
        let mut packet = base_packet();
        packet.flags = PacketFlags(0x20 | 0x10 | 0x04);
        let line = report_line(&packet);
        assert!(line.starts_with("--- INF --- --- RSP --- "));
    }

    #[test]
    fn empty_payload_leaves_a_trailing_space_after_length() {
        let mut packet = base_packet();
        packet.length = 0;
        packet.payload = Bytes::new();
        let line = report_line(&packet);
        assert!(line.ends_with("0x0007 000 "));
    }

    #[test]
    fn params_print_zero_padded_decimal() {
        let mut packet = base_packet();
        packet.param0 = Some(7);
        packet.param1 = Some(250);
        let line = report_line(&packet);
        assert!(line.contains(" 007 250 0x0007"));
    }
}
