//! # `idlicode` Word Codec
//!
//! A reversible transform between text and sequences of words drawn
//! from a small fixed vocabulary: with the built-in 4-word alphabet,
//! `"A"` encodes to `"Dosa Idli Idli Dosa"` and back.
//!
//! Every variant of the scheme is one parameterized engine:
//! * [`alphabet`] - the word/bit-pattern bijection (any power-of-two
//!   size; `quad` and `oct` built in).
//! * [`padding`] - silent zero-fill, or an explicit trailing `pad-N`
//!   marker token.
//! * [`envelope`] - an optional base64 pre-transform around the bytes.
//! * [`codec`] - [`WordCodec`], composing the above into `encode` and
//!   `decode` pipelines.
//! * [`validator`] - untrusted-input scanning; every unknown token is
//!   reported, not just the first.
//! * [`verifier`] - the round-trip correctness oracle.
//! * [`format`] - cosmetic, tokenizer-transparent line wrapping.
//!
//! ```rust
//! use idlicode::{Decoded, WordCodec, alphabet};
//!
//! let codec = WordCodec::with_alphabet(alphabet::quad());
//!
//! let code = codec.encode("A")?;
//! assert_eq!(code, "Dosa Idli Idli Dosa");
//!
//! assert_eq!(codec.decode(&code)?, Decoded::Text("A".to_owned()));
//! # Ok::<(), idlicode::IdlicodeError>(())
//! ```
//!
//! Errors are values ([`IdlicodeError`]); encode and decode are
//! all-or-nothing and never return partial output. A [`WordCodec`] is
//! immutable after construction and safe to share across threads.

#![warn(missing_docs, unused)]

pub mod alphabet;
pub mod bits;
pub mod codec;
pub mod envelope;
pub mod errors;
pub mod format;
pub mod padding;
pub mod validator;
pub mod verifier;

pub use alphabet::WordAlphabet;
pub use codec::{CodecOptions, Decoded, TextMode, WordCodec};
pub use envelope::Envelope;
pub use errors::{ICResult, IdlicodeError};
pub use format::wrap_words;
pub use padding::PaddingPolicy;
pub use verifier::{Verification, verify_decode, verify_encode};
