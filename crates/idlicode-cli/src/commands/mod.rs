use crate::commands::{alphabets::AlphabetsArgs, decode::DecodeArgs, encode::EncodeArgs};

pub mod alphabets;
pub mod decode;
pub mod encode;

/// Subcommands for idlicode-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text into a word sequence.
    Encode(EncodeArgs),

    /// Decode a word sequence back into text.
    Decode(DecodeArgs),

    /// List the built-in alphabets.
    Alphabets(AlphabetsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Alphabets(cmd) => cmd.run(),
        }
    }
}
