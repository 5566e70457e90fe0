//! # Decode-Input Validator
//!
//! One pass over untrusted decode input: tokenize on whitespace runs,
//! canonicalize, map every token against the alphabet, and resolve the
//! padding discipline. All unknown tokens are collected before the scan
//! fails, so one typo never hides another.

use crate::{
    alphabet::{Pattern, WordAlphabet, canonicalize},
    errors::{ICResult, IdlicodeError},
    padding::{self, PaddingPolicy},
};

/// The validated content of a decode input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenScan {
    /// Bit patterns of the code words, in input order.
    pub patterns: Vec<Pattern>,

    /// Trailing fill bits to strip, resolved per the padding policy.
    pub pad: u32,
}

/// Scan a decode input against an alphabet and padding policy.
///
/// ## Arguments
/// * `alphabet` - the word/pattern bijection.
/// * `policy` - the padding discipline in force.
/// * `code` - the raw input: whitespace-delimited tokens, any casing.
///
/// ## Returns
/// * `Ok(None)` - empty or whitespace-only input; nothing to decode.
/// * `Ok(Some(scan))` - every token accounted for, fill count resolved.
/// * `Err(InvalidVocabulary)` - one or more unknown tokens (all listed).
/// * `Err(MissingPaddingMarker | CorruptPaddingMarker)` - marker-policy
///   violations.
/// * `Err(StructuralMisalignment)` - silent policy, no fill count fits
///   the observed bit length.
pub fn scan(
    alphabet: &WordAlphabet,
    policy: PaddingPolicy,
    code: &str,
) -> ICResult<Option<TokenScan>> {
    let mut tokens: Vec<String> = code.split_whitespace().map(canonicalize).collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    // Under the marker policy the final token is the marker slot;
    // marker-shaped tokens anywhere else fall through to the unknown
    // list, as does any marker-shaped token under the silent policy.
    let mut marker = None;
    if policy == PaddingPolicy::Marker
        && let Some(last) = tokens.last()
        && padding::is_marker_token(last)
    {
        marker = tokens.pop();
    }

    let mut patterns = Vec::with_capacity(tokens.len());
    let mut unknown = Vec::new();
    for token in &tokens {
        match alphabet.pattern(token) {
            Some(pattern) => patterns.push(pattern),
            None => unknown.push(token.clone()),
        }
    }
    if !unknown.is_empty() {
        return Err(IdlicodeError::InvalidVocabulary { tokens: unknown });
    }

    let width = alphabet.width();
    let pad = match policy {
        PaddingPolicy::Marker => match marker {
            Some(token) => padding::parse_marker(&token, width)?,
            None => return Err(IdlicodeError::MissingPaddingMarker),
        },
        PaddingPolicy::Silent => {
            let bit_length = patterns.len() as u64 * u64::from(width);
            padding::infer_fill(bit_length, width)?
        }
    };

    Ok(Some(TokenScan { patterns, pad }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn test_scan_case_and_whitespace_tolerance() {
        let quad = alphabet::quad();
        let scan = scan(&quad, PaddingPolicy::Silent, "idli DOSA \n Sambar  chutney")
            .unwrap()
            .unwrap();
        assert_eq!(scan.patterns, vec![0b00, 0b01, 0b10, 0b11]);
        assert_eq!(scan.pad, 0);
    }

    #[test]
    fn test_scan_empty_is_not_an_error() {
        let quad = alphabet::quad();
        assert_eq!(scan(&quad, PaddingPolicy::Silent, "").unwrap(), None);
        assert_eq!(scan(&quad, PaddingPolicy::Silent, " \n\t ").unwrap(), None);
    }

    #[test]
    fn test_scan_batches_all_unknown_tokens() {
        let quad = alphabet::quad();
        let err = scan(&quad, PaddingPolicy::Silent, "Idli Foo Dosa Bar").unwrap_err();
        match err {
            IdlicodeError::InvalidVocabulary { tokens } => {
                assert_eq!(tokens, vec!["foo", "bar"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_scan_misalignment() {
        let quad = alphabet::quad();
        let err = scan(&quad, PaddingPolicy::Silent, "Idli").unwrap_err();
        assert!(matches!(
            err,
            IdlicodeError::StructuralMisalignment { bit_length: 2 }
        ));
    }

    #[test]
    fn test_scan_marker_policy() {
        let oct = alphabet::oct();
        let scan_ok = scan(&oct, PaddingPolicy::Marker, "Sambar Idli Sambar pad-1")
            .unwrap()
            .unwrap();
        assert_eq!(scan_ok.patterns, vec![0b010, 0b000, 0b010]);
        assert_eq!(scan_ok.pad, 1);
    }

    #[test]
    fn test_scan_marker_missing() {
        let oct = alphabet::oct();
        let err = scan(&oct, PaddingPolicy::Marker, "Sambar Idli Sambar").unwrap_err();
        assert!(matches!(err, IdlicodeError::MissingPaddingMarker));
    }

    #[test]
    fn test_scan_marker_corrupt() {
        let oct = alphabet::oct();
        let err = scan(&oct, PaddingPolicy::Marker, "Sambar Idli Sambar pad-7").unwrap_err();
        assert!(matches!(err, IdlicodeError::CorruptPaddingMarker { .. }));
    }

    #[test]
    fn test_scan_marker_shaped_token_mid_sequence() {
        let oct = alphabet::oct();
        let err = scan(&oct, PaddingPolicy::Marker, "Sambar pad-1 Sambar pad-1").unwrap_err();
        match err {
            IdlicodeError::InvalidVocabulary { tokens } => {
                assert_eq!(tokens, vec!["pad-1"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_scan_marker_is_unknown_under_silent_policy() {
        let quad = alphabet::quad();
        let err = scan(&quad, PaddingPolicy::Silent, "Idli Dosa Idli Dosa pad-0").unwrap_err();
        assert!(matches!(err, IdlicodeError::InvalidVocabulary { .. }));
    }
}
