//! # Error Types

use std::string::FromUtf8Error;

/// Errors from idlicode operations.
#[derive(Debug, thiserror::Error)]
pub enum IdlicodeError {
    /// Decode input contained tokens outside the alphabet.
    ///
    /// Every offending token is collected before this is returned,
    /// in input order; a typo early in the sequence never hides a
    /// later one.
    #[error("unknown code word(s): {}", .tokens.join(", "))]
    InvalidVocabulary {
        /// All tokens absent from the alphabet (and not a padding marker).
        tokens: Vec<String>,
    },

    /// Reassembled bit length cannot be reduced to a whole number of bytes.
    #[error("bit length {bit_length} is not reducible to a multiple of 8")]
    StructuralMisalignment {
        /// The reassembled bit length.
        bit_length: u64,
    },

    /// Explicit-padding policy: the trailing marker token is absent.
    #[error("padding marker missing from the end of the sequence")]
    MissingPaddingMarker,

    /// Explicit-padding policy: the marker is present but its count is
    /// not an integer in `[0, width)`.
    #[error("corrupt padding marker: {token:?}")]
    CorruptPaddingMarker {
        /// The offending marker token.
        token: String,
    },

    /// Encode input character outside the single-byte assumption.
    #[error("character {ch:?} at index {index} is not a single-byte code point")]
    EncodingPrecondition {
        /// The offending character.
        ch: char,
        /// Character index in the input text.
        index: usize,
    },

    /// Input exceeds the configured size bound.
    #[error("input length {len} exceeds the limit of {limit} bytes")]
    InputTooLarge {
        /// The rejected input length.
        len: usize,
        /// The configured limit.
        limit: usize,
    },

    /// Decoded byte material is not valid UTF-8 (UTF-8 text mode).
    #[error("decoded bytes are not valid UTF-8")]
    Utf8Payload(#[from] FromUtf8Error),

    /// The envelope layer could not be removed from the decoded bytes.
    #[error("corrupt envelope: {detail}")]
    CorruptEnvelope {
        /// Description of the envelope failure.
        detail: String,
    },

    /// Alphabet size is not a power of two in `[2, 256]`.
    #[error("alphabet size ({size}) must be a power of two in [2, 256]")]
    AlphabetSize {
        /// The rejected size.
        size: usize,
    },

    /// Alphabet word list is inconsistent.
    #[error("{0}")]
    AlphabetConflict(String),
}

/// Result type for idlicode operations.
pub type ICResult<T> = core::result::Result<T, IdlicodeError>;
