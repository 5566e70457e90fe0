use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
};

/// Treat "-" (and absence) as standard IO.
fn stdio_or_path(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Read the whole input into a string.
    ///
    /// The codec operates on complete inputs, not line streams: the
    /// bit groups of one byte can span a word boundary, so no prefix
    /// of the input decodes independently.
    pub fn read_to_string(&self) -> Result<String, Box<dyn std::error::Error>> {
        let mut text = String::new();
        match stdio_or_path(&self.input) {
            None => std::io::stdin().lock().read_to_string(&mut text)?,
            Some(p) => BufReader::new(File::open(p)?).read_to_string(&mut text)?,
        };
        Ok(text)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match stdio_or_path(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
