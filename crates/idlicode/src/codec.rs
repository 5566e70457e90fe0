//! # Codec Orchestration
//!
//! [`WordCodec`] composes the alphabet, bit transcoder, padding policy,
//! and envelope into `encode` and `decode` pipelines. A codec is built
//! once, is immutable, and may be shared by reference across threads;
//! every call is synchronous and stateless.

use crate::{
    alphabet::{Pattern, WordAlphabet},
    bits,
    envelope::Envelope,
    errors::{ICResult, IdlicodeError},
    padding::{self, PaddingPolicy},
    validator,
};

/// Default bound on accepted input size, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1 << 20;

/// How text maps to the byte stream the words encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum TextMode {
    /// One character, one byte. Characters above U+00FF are rejected
    /// up front; decode maps every byte back to the same code point
    /// and cannot fail on structurally valid input.
    #[default]
    Latin1,

    /// The transform is defined over the UTF-8 byte sequence. Encode
    /// accepts any text; decode fails if the reassembled bytes are not
    /// valid UTF-8.
    Utf8,
}

impl TextMode {
    fn text_to_bytes(&self, text: &str) -> ICResult<Vec<u8>> {
        match self {
            TextMode::Latin1 => text
                .chars()
                .enumerate()
                .map(|(index, ch)| {
                    u8::try_from(u32::from(ch))
                        .map_err(|_| IdlicodeError::EncodingPrecondition { ch, index })
                })
                .collect(),
            TextMode::Utf8 => Ok(text.as_bytes().to_vec()),
        }
    }

    fn bytes_to_text(&self, bytes: Vec<u8>) -> ICResult<String> {
        match self {
            TextMode::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            TextMode::Utf8 => Ok(String::from_utf8(bytes)?),
        }
    }
}

/// Codec configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// The padding discipline.
    pub padding: PaddingPolicy,

    /// The envelope pre-transform.
    pub envelope: Envelope,

    /// The text/byte policy.
    pub text_mode: TextMode,

    /// Bound on accepted input size, in bytes, for both directions.
    pub max_input_len: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            padding: PaddingPolicy::default(),
            envelope: Envelope::default(),
            text_mode: TextMode::default(),
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl CodecOptions {
    /// Set the padding policy.
    pub fn with_padding(
        mut self,
        padding: PaddingPolicy,
    ) -> Self {
        self.padding = padding;
        self
    }

    /// Set the envelope transform.
    pub fn with_envelope(
        mut self,
        envelope: Envelope,
    ) -> Self {
        self.envelope = envelope;
        self
    }

    /// Set the text/byte policy.
    pub fn with_text_mode(
        mut self,
        text_mode: TextMode,
    ) -> Self {
        self.text_mode = text_mode;
        self
    }

    /// Set the input-size bound.
    pub fn with_max_input_len(
        mut self,
        max_input_len: usize,
    ) -> Self {
        self.max_input_len = max_input_len;
        self
    }
}

/// The outcome of a decode.
///
/// Decode is all-or-nothing: a failing pipeline stage returns an error
/// and no partial text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The input held no tokens; nothing to decode. This is a distinct
    /// non-error condition, not a failure.
    Empty,

    /// The recovered text.
    Text(String),
}

impl Decoded {
    /// Fold the empty signal into the empty string.
    pub fn into_text(self) -> String {
        match self {
            Decoded::Empty => String::new(),
            Decoded::Text(text) => text,
        }
    }

    /// True for the no-input signal.
    pub fn is_empty_signal(&self) -> bool {
        *self == Decoded::Empty
    }
}

/// A parameterized word codec.
///
/// One engine covers every variant of the scheme: the alphabet size,
/// the padding policy, and the envelope are configuration axes, not
/// separate implementations.
#[derive(Debug, Clone)]
pub struct WordCodec {
    alphabet: WordAlphabet,
    options: CodecOptions,
}

impl WordCodec {
    /// Build a codec over an alphabet with explicit options.
    pub fn new(
        alphabet: WordAlphabet,
        options: CodecOptions,
    ) -> Self {
        Self { alphabet, options }
    }

    /// Build a codec over an alphabet with default options.
    pub fn with_alphabet(alphabet: WordAlphabet) -> Self {
        Self::new(alphabet, CodecOptions::default())
    }

    /// The alphabet.
    pub fn alphabet(&self) -> &WordAlphabet {
        &self.alphabet
    }

    /// The options.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    fn check_input_len(&self, len: usize) -> ICResult<()> {
        let limit = self.options.max_input_len;
        if len > limit {
            return Err(IdlicodeError::InputTooLarge { len, limit });
        }
        Ok(())
    }

    /// Encode text into a space-joined code sequence.
    ///
    /// Empty text yields an empty sequence, not an error.
    ///
    /// ## Arguments
    /// * `text` - the input text, subject to the configured [`TextMode`].
    ///
    /// ## Returns
    /// The code sequence: alphabet words joined by single spaces,
    /// followed by one `pad-N` marker under the marker policy.
    pub fn encode(
        &self,
        text: &str,
    ) -> ICResult<String> {
        self.check_input_len(text.len())?;
        if text.is_empty() {
            return Ok(String::new());
        }

        let bytes = self.options.text_mode.text_to_bytes(text)?;
        let bytes = self.options.envelope.apply(bytes);
        let (patterns, fill) = bits::pack_groups(&bytes, self.alphabet.width());

        log::debug!(
            "encoded {} byte(s) into {} word(s) ({} fill bit(s))",
            bytes.len(),
            patterns.len(),
            fill,
        );

        Ok(self.render(&patterns, fill))
    }

    /// Decode a code sequence back into text.
    ///
    /// The pipeline short-circuits at the first failing stage; no
    /// partial text is ever returned alongside an error.
    ///
    /// ## Arguments
    /// * `code` - whitespace-delimited tokens, any casing.
    ///
    /// ## Returns
    /// [`Decoded::Empty`] for token-free input, [`Decoded::Text`]
    /// otherwise; or the error from the first failing stage.
    pub fn decode(
        &self,
        code: &str,
    ) -> ICResult<Decoded> {
        self.check_input_len(code.len())?;

        let Some(scan) = validator::scan(&self.alphabet, self.options.padding, code)? else {
            return Ok(Decoded::Empty);
        };

        let bytes = bits::unpack_groups(&scan.patterns, self.alphabet.width(), scan.pad)?;
        let bytes = self.options.envelope.remove(bytes)?;
        let text = self.options.text_mode.bytes_to_text(bytes)?;

        log::debug!(
            "decoded {} word(s) into {} character(s)",
            scan.patterns.len(),
            text.chars().count(),
        );

        Ok(Decoded::Text(text))
    }

    /// Re-render a code sequence in canonical display form.
    ///
    /// Tokens are case-folded onto the alphabet's display words and
    /// re-joined with single spaces; the padding marker is normalized.
    /// This is the decode-direction round-trip target: for any code
    /// sequence this accepts, `encode(decode(code))` compares against
    /// `canonicalize_code(code)`.
    ///
    /// ## Returns
    /// `Ok(None)` for token-free input; otherwise the canonical
    /// rendering or the validation error the decode would report.
    pub fn canonicalize_code(
        &self,
        code: &str,
    ) -> ICResult<Option<String>> {
        self.check_input_len(code.len())?;

        let Some(scan) = validator::scan(&self.alphabet, self.options.padding, code)? else {
            return Ok(None);
        };
        Ok(Some(self.render(&scan.patterns, scan.pad)))
    }

    fn render(
        &self,
        patterns: &[Pattern],
        fill: u32,
    ) -> String {
        let mut words: Vec<&str> = patterns.iter().map(|&p| self.alphabet.word(p)).collect();

        let marker;
        if self.options.padding == PaddingPolicy::Marker {
            marker = padding::marker_token(fill);
            words.push(&marker);
        }

        words.join(" ")
    }
}
