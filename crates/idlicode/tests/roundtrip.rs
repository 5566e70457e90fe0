#![allow(missing_docs)]

use idlicode::{
    CodecOptions, Decoded, Envelope, IdlicodeError, PaddingPolicy, TextMode, WordCodec, alphabet,
    verify_decode, verify_encode, wrap_words,
};

const SAMPLES: &[&str] = &[
    "hello world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "Don't forget: the temperature is 72 degrees!",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{e9} na\u{ef}ve",
    "$$$!!!...---",
    " ",
    "a",
    "\t\ttabs\tand\tspaces ",
    "\u{0}\u{1}\u{fe}\u{ff}",
];

fn all_codecs() -> Vec<WordCodec> {
    let mut codecs = Vec::new();
    for alphabet in [alphabet::quad(), alphabet::oct()] {
        for padding in [PaddingPolicy::Silent, PaddingPolicy::Marker] {
            for envelope in [Envelope::None, Envelope::Base64] {
                codecs.push(WordCodec::new(
                    alphabet.clone(),
                    CodecOptions::default()
                        .with_padding(padding)
                        .with_envelope(envelope),
                ));
            }
        }
    }
    codecs
}

#[test]
fn roundtrip_all_configurations() {
    for codec in all_codecs() {
        for text in SAMPLES {
            let code = codec.encode(text).unwrap();
            let decoded = codec.decode(&code).unwrap();
            assert_eq!(
                decoded.clone().into_text(),
                *text,
                "roundtrip mismatch with {:?}: {text:?}",
                codec.options(),
            );
            assert!(!decoded.is_empty_signal());
        }
    }
}

#[test]
fn roundtrip_decode_direction() {
    // Encode(Decode(C)) == canonical(C), for codes produced by encode
    // and then arbitrarily re-cased and re-wrapped.
    for codec in all_codecs() {
        for text in SAMPLES {
            let code = codec.encode(text).unwrap();
            let mangled = wrap_words(&code.to_uppercase(), 3);

            let decoded = codec.decode(&mangled).unwrap().into_text();
            let reencoded = codec.encode(&decoded).unwrap();
            let canonical = codec.canonicalize_code(&mangled).unwrap().unwrap();
            assert_eq!(reencoded, canonical);
        }
    }
}

#[test]
fn verifier_accepts_all_configurations() {
    for codec in all_codecs() {
        for text in SAMPLES {
            let code = codec.encode(text).unwrap();
            let v = verify_encode(&codec, text, &code).unwrap();
            assert!(v.matched, "{}", v.detail);

            let decoded = codec.decode(&code).unwrap().into_text();
            let v = verify_decode(&codec, &code, &decoded).unwrap();
            assert!(v.matched, "{}", v.detail);
        }
    }
}

#[test]
fn concrete_example() {
    let codec = WordCodec::with_alphabet(alphabet::quad());
    assert_eq!(codec.encode("A").unwrap(), "Dosa Idli Idli Dosa");
    assert_eq!(
        codec.decode("Dosa Idli Idli Dosa").unwrap(),
        Decoded::Text("A".to_owned())
    );
}

#[test]
fn case_and_whitespace_tolerance() {
    let codec = WordCodec::with_alphabet(alphabet::quad());
    let tidy = codec.decode("Idli Dosa Sambar Chutney").unwrap();
    let messy = codec.decode("idli DOSA \n Sambar  chutney").unwrap();
    assert_eq!(tidy, messy);
}

#[test]
fn validator_batches_every_unknown_token() {
    let codec = WordCodec::with_alphabet(alphabet::quad());
    match codec.decode("Idli Foo Dosa Bar").unwrap_err() {
        IdlicodeError::InvalidVocabulary { tokens } => {
            assert_eq!(tokens, vec!["foo", "bar"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn alignment_is_rejected_not_truncated() {
    let codec = WordCodec::with_alphabet(alphabet::quad());
    assert!(matches!(
        codec.decode("Idli").unwrap_err(),
        IdlicodeError::StructuralMisalignment { bit_length: 2 }
    ));
}

#[test]
fn formatter_is_transparent_to_decode() {
    let codec = WordCodec::with_alphabet(alphabet::quad());
    let code = codec.encode("formatting should not change meaning").unwrap();

    for n in [1, 2, 5, 8, 100] {
        let wrapped = wrap_words(&code, n);
        assert_eq!(
            codec.decode(&wrapped).unwrap().into_text(),
            "formatting should not change meaning",
            "words_per_line {n}"
        );
    }
}

#[test]
fn empty_input_contract() {
    for codec in all_codecs() {
        assert_eq!(codec.encode("").unwrap(), "");
        assert_eq!(codec.decode("").unwrap(), Decoded::Empty);
        assert_eq!(codec.decode(" \n ").unwrap(), Decoded::Empty);
    }
}

#[test]
fn utf8_mode_roundtrips_multilingual_text() {
    let codec = WordCodec::new(
        alphabet::oct(),
        CodecOptions::default()
            .with_text_mode(TextMode::Utf8)
            .with_padding(PaddingPolicy::Marker),
    );

    for text in ["\u{4f60}\u{597d}", "emoji: \u{1f600}\u{1f680}", "Grüße"] {
        let code = codec.encode(text).unwrap();
        assert_eq!(codec.decode(&code).unwrap().into_text(), text);
    }
}
