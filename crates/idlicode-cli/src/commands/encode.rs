use std::io::Write;

use idlicode::{verify_encode, wrap_words};

use crate::{
    codec_config::CodecArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    codec: CodecArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Wrap the output to N words per line.
    #[clap(long)]
    wrap: Option<usize>,

    /// Round-trip the result through decode and fail on any mismatch.
    #[clap(long)]
    verify: bool,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let codec = self.codec.build_codec();

        let text = self.input.read_to_string()?;
        let code = codec.encode(&text)?;

        if self.verify {
            let v = verify_encode(&codec, &text, &code)?;
            if !v.matched {
                return Err(format!("encode verification failed: {}", v.detail).into());
            }
            log::info!("encode verified: {}", v.detail);
        }

        let rendered = match self.wrap {
            Some(n) => wrap_words(&code, n.max(1)),
            None => code,
        };

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{rendered}")?;
        writer.flush()?;

        Ok(())
    }
}
