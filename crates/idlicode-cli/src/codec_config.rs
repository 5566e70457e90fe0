use idlicode::{CodecOptions, Envelope, PaddingPolicy, TextMode, WordAlphabet, WordCodec, alphabet};

/// Built-in alphabet selection.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum AlphabetChoice {
    /// 4 words / 2 bits: Idli, Dosa, Sambar, Chutney.
    #[default]
    Quad,

    /// 8 words / 3 bits, extending the quad menu.
    Oct,
}

impl AlphabetChoice {
    pub fn build(&self) -> WordAlphabet {
        match self {
            AlphabetChoice::Quad => alphabet::quad(),
            AlphabetChoice::Oct => alphabet::oct(),
        }
    }
}

/// Codec configuration arg group.
#[derive(clap::Args, Debug)]
pub struct CodecArgs {
    /// Built-in alphabet to use.
    #[clap(long, value_enum, default_value = "quad")]
    pub alphabet: AlphabetChoice,

    /// Padding policy: "silent" or "marker".
    #[clap(long, default_value_t = PaddingPolicy::Silent)]
    pub padding: PaddingPolicy,

    /// Envelope pre-transform: "none" or "base64".
    #[clap(long, default_value_t = Envelope::None)]
    pub envelope: Envelope,

    /// Text/byte policy: "latin1" or "utf8".
    #[clap(long, default_value_t = TextMode::Latin1)]
    pub text_mode: TextMode,
}

impl CodecArgs {
    /// Build the configured codec.
    pub fn build_codec(&self) -> WordCodec {
        WordCodec::new(
            self.alphabet.build(),
            CodecOptions::default()
                .with_padding(self.padding)
                .with_envelope(self.envelope)
                .with_text_mode(self.text_mode),
        )
    }
}
