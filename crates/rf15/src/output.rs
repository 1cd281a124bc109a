use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rf15_decode::{report_line, Packet};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    /// The classic receiver-log single-line format.
    Report,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct AddressOutput {
    group: u8,
    device: u32,
}

#[derive(Serialize)]
struct PacketOutput {
    header: u8,
    types: Vec<&'static str>,
    addr0: Option<AddressOutput>,
    addr1: Option<AddressOutput>,
    addr2: Option<AddressOutput>,
    param0: Option<u8>,
    param1: Option<u8>,
    command: String,
    length: u8,
    payload: String,
}

pub fn print_packet(packet: &Packet, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = PacketOutput {
                header: packet.header.0,
                types: type_markers(packet),
                addr0: packet.addr0.map(address_output),
                addr1: packet.addr1.map(address_output),
                addr2: packet.addr2.map(address_output),
                param0: packet.param0,
                param1: packet.param1,
                command: format!("0x{:04X}", packet.command),
                length: packet.length,
                payload: hex_string(packet.payload.as_ref()),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    "TYPE", "ADDR0", "ADDR1", "ADDR2", "P0", "P1", "CMD", "LEN", "PAYLOAD",
                ])
                .add_row(vec![
                    type_markers(packet).join("+"),
                    address_column(packet.addr0),
                    address_column(packet.addr1),
                    address_column(packet.addr2),
                    param_column(packet.param0),
                    param_column(packet.param1),
                    format!("0x{:04X}", packet.command),
                    packet.length.to_string(),
                    hex_string(packet.payload.as_ref()),
                ]);
            println!("{table}");
        }
        OutputFormat::Report => {
            println!("{}", report_line(packet));
        }
    }
}

fn type_markers(packet: &Packet) -> Vec<&'static str> {
    let mut types = Vec::new();
    if packet.flags.is_information() {
        types.push("INF");
    }
    if packet.flags.is_request() {
        types.push("REQ");
    }
    if packet.flags.is_response() {
        types.push("RSP");
    }
    if packet.flags.is_write() {
        types.push("WRT");
    }
    types
}

fn address_output(addr: rf15_decode::Address) -> AddressOutput {
    AddressOutput {
        group: addr.group(),
        device: addr.device(),
    }
}

fn address_column(addr: Option<rf15_decode::Address>) -> String {
    match addr {
        Some(addr) => format!("{:02}:{:06}", addr.group(), addr.device()),
        None => "-".to_string(),
    }
}

fn param_column(param: Option<u8>) -> String {
    match param {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

fn hex_string(payload: &[u8]) -> String {
    payload.iter().map(|byte| format!("{byte:02X}")).collect()
}
