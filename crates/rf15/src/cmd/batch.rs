use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::{info, warn};

use crate::cmd::BatchArgs;
use crate::exit::{io_error, CliResult, SUCCESS};
use crate::output::{print_packet, OutputFormat};

/// Run a whole capture file through the decoder.
///
/// A bad frame is logged and skipped; the batch always runs to the end of
/// the file.
pub fn run(args: BatchArgs, format: OutputFormat) -> CliResult<i32> {
    let file = File::open(&args.file).map_err(|err| io_error("opening capture failed", err))?;
    let reader = BufReader::new(file);

    let mut decoded = 0usize;
    let mut failed = 0usize;

    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| io_error("reading capture failed", err))?;
        if line.is_empty() || line.starts_with('#') || line.starts_with(' ') {
            continue;
        }

        match rf15_decode::decode(&line) {
            Ok(packet) => {
                print_packet(&packet, format);
                decoded += 1;
            }
            Err(err) => {
                warn!(line = number + 1, %err, "invalid packet");
                failed += 1;
            }
        }
    }

    info!(decoded, failed, "batch finished");

    Ok(SUCCESS)
}
