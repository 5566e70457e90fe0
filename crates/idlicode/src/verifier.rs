//! # Round-Trip Verifier
//!
//! A pure diagnostic over a codec result: apply the inverse operation
//! and require exact equality with the original. The supplementary
//! positional-similarity percentage is reported alongside but never
//! substitutes for the exact-match verdict.

use crate::{
    codec::WordCodec,
    errors::ICResult,
};

/// The outcome of a round-trip verification.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    /// Exact-equality verdict. This is the only field that counts.
    pub matched: bool,

    /// Human-readable comparison summary.
    pub detail: String,

    /// Positional character-match percentage over the longer of the
    /// two strings. Diagnostic only: 99% is still a failure.
    pub similarity: f64,
}

/// Verify an encode result: decode the code and compare with the
/// original text.
///
/// ## Arguments
/// * `codec` - the codec that produced `code`.
/// * `text` - the original encode input.
/// * `code` - the encode output under scrutiny.
///
/// ## Returns
/// The verification outcome, or the decode error if the code does not
/// survive its own decode pipeline.
pub fn verify_encode(
    codec: &WordCodec,
    text: &str,
    code: &str,
) -> ICResult<Verification> {
    let decoded = codec.decode(code)?.into_text();
    Ok(compare(text, &decoded))
}

/// Verify a decode result: re-encode the text and compare with the
/// canonicalized original code.
///
/// ## Arguments
/// * `codec` - the codec that produced `text`.
/// * `code` - the original decode input.
/// * `text` - the decode output under scrutiny.
pub fn verify_decode(
    codec: &WordCodec,
    code: &str,
    text: &str,
) -> ICResult<Verification> {
    let reencoded = codec.encode(text)?;
    let canonical = codec.canonicalize_code(code)?.unwrap_or_default();
    Ok(compare(&canonical, &reencoded))
}

fn compare(
    expected: &str,
    actual: &str,
) -> Verification {
    let matched = expected == actual;
    let similarity = positional_similarity(expected, actual);

    let detail = if matched {
        "round-trip output matches the original exactly".to_owned()
    } else {
        format!("round-trip output diverges from the original (positional similarity {similarity:.1}%)")
    };

    Verification {
        matched,
        detail,
        similarity,
    }
}

/// Count of positionally equal characters over the longer length, x100.
fn positional_similarity(
    a: &str,
    b: &str,
) -> f64 {
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 100.0;
    }

    let hits = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
    hits as f64 / longer as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn test_verify_encode_exact() {
        let codec = WordCodec::with_alphabet(alphabet::quad());
        let code = codec.encode("hello").unwrap();

        let v = verify_encode(&codec, "hello", &code).unwrap();
        assert!(v.matched);
        assert_eq!(v.similarity, 100.0);
    }

    #[test]
    fn test_verify_encode_mismatch() {
        let codec = WordCodec::with_alphabet(alphabet::quad());
        let code = codec.encode("hellp").unwrap();

        let v = verify_encode(&codec, "hello", &code).unwrap();
        assert!(!v.matched);
        assert_eq!(v.similarity, 80.0);
    }

    #[test]
    fn test_high_similarity_is_still_failure() {
        let codec = WordCodec::with_alphabet(alphabet::quad());
        let text = "a".repeat(99) + "b";
        let code = codec.encode(&("a".repeat(100))).unwrap();

        let v = verify_encode(&codec, &text, &code).unwrap();
        assert!(!v.matched);
        assert!(v.similarity >= 99.0);
    }

    #[test]
    fn test_verify_decode_canonicalizes() {
        let codec = WordCodec::with_alphabet(alphabet::quad());
        let code = "dosa IDLI \n idli  dosa";
        let text = codec.decode(code).unwrap().into_text();

        let v = verify_decode(&codec, code, &text).unwrap();
        assert!(v.matched, "{}", v.detail);
    }

    #[test]
    fn test_verify_empty() {
        let codec = WordCodec::with_alphabet(alphabet::quad());
        let v = verify_encode(&codec, "", "").unwrap();
        assert!(v.matched);
        assert_eq!(v.similarity, 100.0);

        let v = verify_decode(&codec, "", "").unwrap();
        assert!(v.matched);
    }
}
