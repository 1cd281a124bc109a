use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod batch;
pub mod decode;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a single captured frame.
    Decode(DecodeArgs),
    /// Decode every frame in a capture file, skipping bad ones.
    Batch(BatchArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Batch(args) => batch::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Bit-string of '0'/'1' characters.
    #[arg(conflicts_with = "file")]
    pub bits: Option<String>,
    /// Read the bit-string from a file instead.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Capture file: one bit-string per line; lines that are empty or
    /// start with '#' or a space are skipped.
    pub file: PathBuf,
}
