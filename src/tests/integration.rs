#[cfg(test)]
mod integration_tests {

    use crate::{
        Error, Form, NFC, NFD, NFKC, NormalizeConfusables, Sanitizer, Stage, StageError,
        StripZeroWidth, are_confusable, normalize_unicode, skeleton,
    };
    use std::borrow::Cow;

    const SAMPLES: &[&str] = &[
        "",
        "hello world",
        "café naïve El Niño",
        "cafe\u{0301} nai\u{0308}ve",
        "ﬁﬂﬀﬃﬄ ½ ¼ ① ⑩ ㎒ ™",
        "Ｆｕｌｌｗｉｄｔｈ ＡＢＣ １２３",
        "한국어 텍스트 \u{1100}\u{1161}\u{11A8}",
        "日本語のテキスト ｶﾀｶﾅ",
        "Ελληνικά ΐ ΰ",
        "Русский текст ёЁй",
        "Tiếng Việt có dấu ệ ậ ợ",
        "a\u{0301}\u{0323}\u{0302} q\u{0307}\u{0323}",
        "\u{0958}\u{0959} \u{09DC} \u{0B5C}",
        "\u{212B} \u{2126} \u{212A}",
        "\u{1E9B}\u{0323}",
        "x\u{0315}\u{0300}\u{05AE}\u{0300}b",
        "\u{0BC6}\u{0BBE} \u{0DD9}\u{0DCF}",
        "\u{FDFA} \u{3300} \u{1D400}\u{1D41A}",
    ];

    fn assert_matches_reference(s: &str) {
        use unicode_normalization::UnicodeNormalization;

        let expected = [
            (Form::Nfc, s.nfc().collect::<String>()),
            (Form::Nfd, s.nfd().collect::<String>()),
            (Form::Nfkc, s.nfkc().collect::<String>()),
            (Form::Nfkd, s.nfkd().collect::<String>()),
        ];
        for (form, expected) in expected {
            assert_eq!(normalize_unicode(s, form, false), expected, "{form} {s:?}");
        }
    }

    #[test]
    fn matches_unicode_normalization_crate() {
        for &s in SAMPLES {
            assert_matches_reference(s);
        }
    }

    #[test]
    fn matches_icu_normalizer() {
        use icu_normalizer::{
            ComposingNormalizer, DecomposingNormalizer, DecomposingNormalizerBorrowed,
        };

        let nfc = ComposingNormalizer::new_nfc();
        let nfkc = ComposingNormalizer::new_nfkc();
        let nfd = DecomposingNormalizer::new_nfd();
        let nfkd = DecomposingNormalizerBorrowed::new_nfkd();

        for &s in SAMPLES {
            assert_eq!(normalize_unicode(s, Form::Nfc, false), nfc.normalize(s), "NFC {s:?}");
            assert_eq!(normalize_unicode(s, Form::Nfd, false), nfd.normalize(s), "NFD {s:?}");
            assert_eq!(normalize_unicode(s, Form::Nfkc, false), nfkc.normalize(s), "NFKC {s:?}");
            assert_eq!(normalize_unicode(s, Form::Nfkd, false), nfkd.normalize(s), "NFKD {s:?}");
        }
    }

    #[test]
    fn every_codepoint_matches_reference() {
        // planes 0-3 hold every assigned decomposable codepoint
        for c in (0..=0x3FFFFu32).filter_map(char::from_u32) {
            assert_matches_reference(c.encode_utf8(&mut [0u8; 4]));
            // a trailing acute exercises composition against every starter
            assert_matches_reference(&format!("{c}\u{0301}"));
        }
    }

    #[test]
    fn quick_check_agrees_with_full_pass() {
        use crate::normalize::{QuickCheck, quick_check};
        use unicode_normalization::UnicodeNormalization;

        let reference = |s: &str, form: Form| -> String {
            match form {
                Form::Nfc => s.nfc().collect(),
                Form::Nfd => s.nfd().collect(),
                Form::Nfkc => s.nfkc().collect(),
                Form::Nfkd => s.nfkd().collect(),
            }
        };
        let mut answered = 0usize;
        for c in (0..=0x3FFFFu32).filter_map(char::from_u32) {
            for s in [c.to_string(), format!("{c}\u{0301}"), format!("a{c}")] {
                for form in Form::ALL {
                    let normalized = reference(&s, form) == s;
                    match quick_check(&s, form) {
                        QuickCheck::Yes => assert!(normalized, "{form} {s:?}"),
                        QuickCheck::No => assert!(!normalized, "{form} {s:?}"),
                        QuickCheck::Maybe => continue,
                    }
                    answered += 1;
                }
            }
        }
        // the scan settles the large majority without a full pass
        assert!(answered > 2_000_000, "only {answered} answered");
    }

    #[test]
    fn identifier_policy_folds_spoofs() {
        let sanitizer = Sanitizer::identifier();
        assert_eq!(
            sanitizer.stage_names(),
            ["nfkc", "strip_zero_width", "normalize_confusables", "nfc"]
        );

        let genuine = sanitizer.process("paypal").unwrap();
        for spoof in ["pаypаl", "pay\u{200B}pal", "ｐａｙｐａｌ", "\u{FEFF}paypal"] {
            assert_eq!(sanitizer.process(spoof).unwrap(), genuine, "{spoof:?}");
        }
        // accents survive and compare equal whether or not a spoof was folded
        assert_eq!(
            sanitizer.process("cаfé").unwrap(),
            sanitizer.process("café").unwrap()
        );
        // a folded letter recomposes with the mark that follows it
        assert_eq!(sanitizer.process("\u{0430}\u{0301}").unwrap(), "\u{00E1}");
        assert_eq!(
            crate::normalize_confusables("\u{0430}\u{0301}"),
            "a\u{0301}"
        );
    }

    #[test]
    fn identifier_policy_zero_copy_when_clean() {
        let sanitizer = Sanitizer::identifier();
        let input = "hello_world";
        let result = sanitizer.process(input).unwrap();
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn process_bytes_rejects_invalid_utf8() {
        let sanitizer = Sanitizer::builder().add_stage(NFC).build();
        assert_eq!(sanitizer.process_bytes("café".as_bytes()).unwrap(), "café");
        assert!(matches!(
            sanitizer.process_bytes(b"caf\xE9"),
            Err(Error::InvalidEncoding { valid_up_to: 3 })
        ));
    }

    #[test]
    fn reject_policy_surfaces_stage_error() {
        let sanitizer = Sanitizer::builder()
            .add_stage(NFKC)
            .add_stage(StripZeroWidth)
            .reject_confusables()
            .build();

        assert_eq!(sanitizer.process("hello").unwrap(), "hello");
        assert_eq!(sanitizer.process("he\u{200B}llo").unwrap(), "hello");
        match sanitizer.process("gооgle") {
            Err(Error::Stage(StageError::Validation(stage, _))) => {
                assert_eq!(stage, "reject_confusables")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn custom_stage_failure_propagates() {
        struct Refuse;
        impl Stage for Refuse {
            fn name(&self) -> &'static str {
                "refuse"
            }
            fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
                Ok(!text.is_empty())
            }
            fn apply<'a>(&self, _: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
                Err(StageError::Failed(self.name(), "refused".into()))
            }
        }

        let sanitizer = Sanitizer::builder().add_stage(NFC).add_stage(Refuse).build();
        assert_eq!(sanitizer.process("").unwrap(), "");
        let err = sanitizer.process("x").unwrap_err();
        assert_eq!(err.to_string(), "stage error: stage `refuse` failed: refused");
    }

    #[test]
    fn nfd_then_confusables_pipeline() {
        let sanitizer = Sanitizer::builder()
            .add_stage(NFD)
            .add_stage(NormalizeConfusables)
            .build();
        assert_eq!(sanitizer.process("Ηello Wοrld").unwrap(), "Hello World");
        assert_eq!(sanitizer.process("café").unwrap(), "cafe\u{0301}");
    }

    #[test]
    fn mixed_script_sentence() {
        let input = "Ηello Wοrld! Тhis hаs cοnfusаble chаrаcters.";
        let found = crate::detect_confusables(input);
        let mut found: Vec<&str> = found.iter().map(String::as_str).collect();
        found.sort_unstable();
        assert_eq!(found, ["Η", "ο", "Т", "а"]);
        assert_eq!(
            crate::normalize_confusables(input),
            "Hello World! This has confusable characters."
        );
    }

    #[test]
    fn skeleton_comparisons() {
        assert_eq!(skeleton("𝐚𝐝𝐦𝐢𝐧"), skeleton("admin"));
        assert!(are_confusable("admin", "𝐚𝐝𝐦𝐢𝐧"));
        assert!(are_confusable("rnicrosoft", "microsoft"));
        assert!(!are_confusable("google", "goggle"));
    }
}
