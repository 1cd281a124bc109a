use std::fs;

use crate::cmd::DecodeArgs;
use crate::exit::{decode_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_packet, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let bits = match (args.bits, args.file) {
        (Some(bits), None) => bits,
        (None, Some(path)) => {
            fs::read_to_string(&path).map_err(|err| io_error("reading capture failed", err))?
        }
        _ => return Err(CliError::new(USAGE, "pass a bit-string or --file")),
    };

    let packet = rf15_decode::decode(&bits).map_err(|err| decode_error("decode failed", err))?;
    print_packet(&packet, format);

    Ok(SUCCESS)
}
