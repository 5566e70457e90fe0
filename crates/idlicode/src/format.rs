//! # Code-Sequence Formatting
//!
//! Cosmetic line wrapping for word sequences. Formatting is fully
//! transparent to the validator's tokenizer: re-tokenizing the wrapped
//! output reproduces the original token order for any line width.

/// Wrap a word sequence to a fixed number of words per line.
///
/// ## Arguments
/// * `code` - a whitespace-delimited word sequence.
/// * `words_per_line` - words per output line; must be at least 1.
///
/// ## Returns
/// The sequence with line breaks every `words_per_line` words.
///
/// ## Panics
/// If `words_per_line` is zero.
pub fn wrap_words(
    code: &str,
    words_per_line: usize,
) -> String {
    assert!(words_per_line >= 1, "words_per_line must be at least 1");

    code.split_whitespace()
        .collect::<Vec<_>>()
        .chunks(words_per_line)
        .map(|line| line.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
