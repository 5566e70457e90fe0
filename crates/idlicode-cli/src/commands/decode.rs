use std::io::Write;

use idlicode::verify_decode;

use crate::{
    codec_config::CodecArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    codec: CodecArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Round-trip the result through encode and fail on any mismatch.
    #[clap(long)]
    verify: bool,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let codec = self.codec.build_codec();

        let code = self.input.read_to_string()?;
        let decoded = codec.decode(&code)?;

        if decoded.is_empty_signal() {
            log::warn!("input held no code words; nothing to decode");
        }
        let text = decoded.into_text();

        if self.verify {
            let v = verify_decode(&codec, &code, &text)?;
            if !v.matched {
                return Err(format!("decode verification failed: {}", v.detail).into());
            }
            log::info!("decode verified: {}", v.detail);
        }

        let mut writer = self.output.open_writer()?;
        write!(writer, "{text}")?;
        writer.flush()?;

        Ok(())
    }
}
