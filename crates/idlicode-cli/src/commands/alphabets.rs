use std::io::Write;

use idlicode::alphabet;

use crate::input_output::OutputArgs;

/// Args for the alphabets command.
#[derive(clap::Args, Debug)]
pub struct AlphabetsArgs {
    #[command(flatten)]
    output: OutputArgs,
}

impl AlphabetsArgs {
    /// Run the alphabets command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;

        for (name, alphabet) in [("quad", alphabet::quad()), ("oct", alphabet::oct())] {
            writeln!(
                writer,
                "{name}: {} words, {} bits/word",
                alphabet.len(),
                alphabet.width(),
            )?;

            let width = alphabet.width() as usize;
            for (pattern, word) in alphabet.words().iter().enumerate() {
                writeln!(writer, "  {pattern:0width$b} {word}")?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}
