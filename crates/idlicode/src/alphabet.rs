//! # Word/Bit-Pattern Bijection Table

use std::collections::HashMap;

use crate::{
    errors::{ICResult, IdlicodeError},
    padding::is_marker_token,
};

/// The value of one fixed-width bit group.
pub type Pattern = u16;

/// Fixed bijection between `width`-bit patterns and vocabulary words.
///
/// The word list is ordered: the word at index `i` stands for the
/// pattern `i`. The size is a power of two in `[2, 256]`, so
/// `width = log2(size)` is `1..=8` bits.
///
/// Lookups go through a canonical form (trimmed, ASCII-lowercased), so
/// decode input is case-insensitive and tolerant of stray whitespace
/// around tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct WordAlphabet {
    /// Display-form words, indexed by pattern value.
    words: Vec<String>,

    /// Canonical word form -> pattern value.
    lookup: HashMap<String, Pattern>,

    /// Bits per word.
    width: u32,
}

impl WordAlphabet {
    /// Build an alphabet from an ordered word list.
    ///
    /// ## Arguments
    /// * `words` - the display-form words; index is the bit pattern.
    ///
    /// ## Returns
    /// A new `WordAlphabet`, or an error if the list is not a usable
    /// bijection: size not a power of two in `[2, 256]`, an empty word,
    /// duplicate canonical forms, or a word shadowing the padding-marker
    /// namespace.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> ICResult<Self> {
        let size = words.len();
        if size < 2 || size > 256 || !size.is_power_of_two() {
            return Err(IdlicodeError::AlphabetSize { size });
        }
        let width = size.trailing_zeros();

        let mut display = Vec::with_capacity(size);
        let mut lookup = HashMap::with_capacity(size);
        for (pattern, word) in words.iter().enumerate() {
            let word = word.as_ref().trim();
            if word.is_empty() || word.split_whitespace().count() != 1 {
                return Err(IdlicodeError::AlphabetConflict(format!(
                    "word for pattern {pattern} is empty or contains whitespace"
                )));
            }

            let canonical = canonicalize(word);
            if is_marker_token(&canonical) {
                return Err(IdlicodeError::AlphabetConflict(format!(
                    "word {word:?} shadows the padding marker namespace"
                )));
            }
            if lookup.insert(canonical, pattern as Pattern).is_some() {
                return Err(IdlicodeError::AlphabetConflict(format!(
                    "duplicate word {word:?} (canonical forms must be distinct)"
                )));
            }

            display.push(word.to_owned());
        }

        Ok(Self {
            words: display,
            lookup,
            width,
        })
    }

    /// The number of words in the alphabet.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction requires at least 2 words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bits per word.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The display-form words, in pattern order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the display-form word for a pattern.
    ///
    /// ## Panics
    /// If `pattern` is out of range; patterns produced by the bit
    /// transcoder are `width`-bit values and always in range.
    pub fn word(&self, pattern: Pattern) -> &str {
        &self.words[pattern as usize]
    }

    /// Look up the pattern for a token, if it names a word.
    ///
    /// The token is canonicalized before lookup.
    pub fn pattern(&self, token: &str) -> Option<Pattern> {
        self.lookup.get(&canonicalize(token)).copied()
    }
}

/// The canonical comparison form of a token: trimmed and ASCII-lowercased.
pub fn canonicalize(token: &str) -> String {
    token.trim().to_ascii_lowercase()
}

/// The 4-word / 2-bit alphabet: `{00:Idli, 01:Dosa, 10:Sambar, 11:Chutney}`.
pub fn quad() -> WordAlphabet {
    WordAlphabet::from_words(&["Idli", "Dosa", "Sambar", "Chutney"])
        .expect("builtin alphabet is valid")
}

/// The 8-word / 3-bit alphabet, extending the quad menu.
pub fn oct() -> WordAlphabet {
    WordAlphabet::from_words(&[
        "Idli", "Dosa", "Sambar", "Chutney", "Vada", "Upma", "Pongal", "Payasam",
    ])
    .expect("builtin alphabet is valid")
}
