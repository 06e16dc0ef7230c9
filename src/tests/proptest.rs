mod prop_tests {
    use crate::{
        Form, Sanitizer, detect_confusables, is_confusable, is_normalized, normalize_confusables,
        normalize_unicode, skeleton, strip_zero_width, unicode::contains_zero_width,
    };
    use proptest::prelude::*;
    use std::borrow::Cow;

    // Base letters, combining marks across several classes, conjoining jamo,
    // compatibility forms, confusables and zero-width characters.
    const MIXED: &str = "[a-zA-Z0-9 \u{0300}-\u{0345}\u{0591}-\u{05AF}\u{093C}\u{0BBE}\u{0BC6}\u{1100}-\u{1112}\u{1161}-\u{1175}\u{11A8}-\u{11C2}\u{AC00}-\u{AC20}éñÅΩ\u{212B}ﬁﬃ①Ａ-Ｚ𝐚-𝐳\u{0430}-\u{044F}\u{0391}-\u{03C9}\u{200B}-\u{200F}\u{FEFF}\u{2060}]{0,40}";

    fn form() -> impl Strategy<Value = Form> {
        prop::sample::select(Form::ALL.to_vec())
    }

    /// Swaps Latin letters for their Cyrillic look-alikes.
    fn cyrillic_twin(s: &str) -> String {
        const LATIN: &str = "aeopcxyABEHKMOPCTX";
        const CYRILLIC: &str = "аеорсхуАВЕНКМОРСТХ";
        s.chars()
            .map(|c| match LATIN.chars().position(|l| l == c) {
                Some(i) => CYRILLIC.chars().nth(i).unwrap_or(c),
                None => c,
            })
            .collect()
    }

    fn is_subsequence(short: &str, long: &str) -> bool {
        let mut long = long.chars();
        short.chars().all(|c| long.any(|d| d == c))
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(s in MIXED, form in form()) {
            let once = normalize_unicode(&s, form, false).into_owned();
            let twice = normalize_unicode(&once, form, false);
            prop_assert_eq!(&once, &*twice);
            prop_assert!(matches!(twice, Cow::Borrowed(_)));
        }

        #[test]
        fn normalization_is_idempotent_on_any_text(s in "\\PC{0,200}", form in form()) {
            let once = normalize_unicode(&s, form, false).into_owned();
            let twice = normalize_unicode(&once, form, false).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn stripped_output_has_no_zero_width(s in MIXED, form in form()) {
            let stripped = normalize_unicode(&s, form, true);
            prop_assert!(!contains_zero_width(&stripped));
            prop_assert!(matches!(strip_zero_width(&stripped), Cow::Borrowed(_)));
        }

        #[test]
        fn matches_reference_implementation(s in MIXED) {
            use unicode_normalization::UnicodeNormalization;
            prop_assert_eq!(normalize_unicode(&s, Form::Nfc, false), s.nfc().collect::<String>());
            prop_assert_eq!(normalize_unicode(&s, Form::Nfd, false), s.nfd().collect::<String>());
            prop_assert_eq!(normalize_unicode(&s, Form::Nfkc, false), s.nfkc().collect::<String>());
            prop_assert_eq!(normalize_unicode(&s, Form::Nfkd, false), s.nfkd().collect::<String>());
        }

        #[test]
        fn stripping_is_subtractive(s in MIXED, form in form()) {
            let kept = normalize_unicode(&s, form, false);
            let stripped = normalize_unicode(&s, form, true);
            prop_assert!(stripped.len() <= kept.len());
            prop_assert!(is_subsequence(&stripped, &kept));
        }

        #[test]
        fn confusables_normalization_is_idempotent(s in MIXED) {
            let once = normalize_confusables(&s).into_owned();
            let twice = normalize_confusables(&once);
            prop_assert_eq!(&once, &*twice);
            prop_assert!(matches!(twice, Cow::Borrowed(_)));
        }

        #[test]
        fn confusables_idempotent_on_any_text(s in "\\PC{0,200}") {
            let once = normalize_confusables(&s).into_owned();
            let twice = normalize_confusables(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn cyrillic_twin_folds_to_the_same_text(s in MIXED) {
            let twin = cyrillic_twin(&s);
            let folded = normalize_confusables(&s);
            let folded_twin = normalize_confusables(&twin);
            prop_assert_eq!(skeleton(&folded), skeleton(&folded_twin));
            prop_assert_eq!(folded, folded_twin);
        }

        #[test]
        fn is_normalized_agrees_with_normalize(s in MIXED, form in form()) {
            let unchanged = normalize_unicode(&s, form, false) == s.as_str();
            prop_assert_eq!(is_normalized(&s, form), unchanged);
        }

        #[test]
        fn clean_text_is_returned_unchanged(s in MIXED) {
            if detect_confusables(&s).is_empty() {
                let out = normalize_confusables(&s);
                prop_assert!(matches!(out, Cow::Borrowed(b) if b.as_ptr() == s.as_ptr()));
            }
        }

        #[test]
        fn detected_characters_come_from_input(s in MIXED) {
            for found in detect_confusables(&s) {
                let mut chars = found.chars();
                let c = chars.next().unwrap();
                prop_assert!(chars.next().is_none());
                prop_assert!(s.contains(c));
                prop_assert!(is_confusable(c));
            }
        }

        #[test]
        fn skeleton_ignores_compatibility_variants(s in MIXED) {
            let nfkc = normalize_unicode(&s, Form::Nfkc, false);
            prop_assert_eq!(skeleton(&s), skeleton(&nfkc));
        }

        #[test]
        fn identifier_policy_is_idempotent(s in MIXED) {
            let sanitizer = Sanitizer::identifier();
            let once = sanitizer.process(&s).unwrap().into_owned();
            let twice = sanitizer.process(&once).unwrap().into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn ascii_without_confusables_is_zero_copy(s in "[a-hj-ln-z ]{0,200}") {
            let input = s.as_str();
            for form in Form::ALL {
                let out = normalize_unicode(input, form, true);
                prop_assert!(matches!(out, Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
            }
            let out = normalize_confusables(input);
            prop_assert!(matches!(out, Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
        }
    }
}
