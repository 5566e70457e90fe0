//! # Envelope Pre-Transforms
//!
//! An optional transform applied to the text bytes before chunking
//! (and removed after reassembly on decode). The envelope changes the
//! byte material the words encode, not the codec itself.

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::errors::{ICResult, IdlicodeError};

/// The envelope transform applied around the bit transcoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Envelope {
    /// No transform; the words encode the text bytes directly.
    #[default]
    None,

    /// Base64-encode the text bytes before chunking.
    Base64,
}

impl Envelope {
    /// Apply the envelope to the encode-side byte stream.
    pub fn apply(&self, bytes: Vec<u8>) -> Vec<u8> {
        match self {
            Envelope::None => bytes,
            Envelope::Base64 => BASE64_STANDARD.encode(&bytes).into_bytes(),
        }
    }

    /// Remove the envelope from the decode-side byte stream.
    ///
    /// ## Returns
    /// The inner bytes, or `CorruptEnvelope` when the reassembled bytes
    /// are not a valid envelope payload.
    pub fn remove(&self, bytes: Vec<u8>) -> ICResult<Vec<u8>> {
        match self {
            Envelope::None => Ok(bytes),
            Envelope::Base64 => {
                BASE64_STANDARD
                    .decode(&bytes)
                    .map_err(|e| IdlicodeError::CorruptEnvelope {
                        detail: e.to_string(),
                    })
            }
        }
    }
}
