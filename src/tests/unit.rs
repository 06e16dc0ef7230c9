#[cfg(test)]
mod unit_tests {

    use crate::{
        Database, Error, Form, compose::compose, decompose::{Decomposition, decompose},
        detect_confusables, detect_confusables_bytes, normalize_confusables,
        normalize_confusables_bytes, normalize_unicode, normalize_unicode_bytes,
    };
    use std::borrow::Cow;

    #[test]
    fn latin_capital_a_is_clean() {
        assert!(detect_confusables("A").is_empty());
        assert_eq!(normalize_confusables("A"), "A");
    }

    #[test]
    fn cyrillic_capital_a_is_detected() {
        let found = detect_confusables("А");
        assert_eq!(found.len(), 1);
        assert!(found.contains("\u{0410}"));
        assert_eq!(normalize_confusables("А"), normalize_confusables("A"));
    }

    #[test]
    fn combining_acute_composes_and_decomposes() {
        let input = "e\u{0301}";
        assert_eq!(normalize_unicode(input, Form::Nfc, false), "\u{00E9}");
        assert_eq!(normalize_unicode(input, Form::Nfd, false), input);
    }

    #[test]
    fn zero_width_joiner_strip_flag() {
        let input = "a\u{200D}b";
        assert_eq!(normalize_unicode(input, Form::Nfc, true), "ab");
        assert_eq!(normalize_unicode(input, Form::Nfc, false), input);
    }

    #[test]
    fn empty_input_everywhere() {
        assert!(detect_confusables("").is_empty());
        assert_eq!(normalize_confusables(""), "");
        for form in Form::ALL {
            assert_eq!(normalize_unicode("", form, false), "");
            assert_eq!(normalize_unicode("", form, true), "");
        }
    }

    #[test]
    fn zero_copy_when_already_normalized() {
        let input = "already composed café";
        let result = normalize_unicode(input, Form::Nfc, true);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));

        let input = "plain ascii";
        let result = normalize_confusables(input);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_alias_is_nfkd() {
        let input = "ﬁ\u{200B}é";
        assert_eq!(
            crate::unicode_normalize_kd(input, true),
            normalize_unicode(input, Form::Nfkd, true)
        );
        assert_eq!(crate::unicode_normalize_kd(input, false), "fi\u{200B}e\u{0301}");
    }

    #[test]
    fn byte_variants_validate() {
        assert!(detect_confusables_bytes("pаypаl".as_bytes()).unwrap().contains("а"));
        assert_eq!(normalize_confusables_bytes(b"hello").unwrap(), "hello");
        assert_eq!(
            normalize_unicode_bytes("cafe\u{0301}".as_bytes(), Form::Nfc, false).unwrap(),
            "café"
        );

        let invalid = b"hello \xFF world";
        assert!(matches!(
            detect_confusables_bytes(invalid),
            Err(Error::InvalidEncoding { valid_up_to: 6 })
        ));
        assert!(normalize_confusables_bytes(invalid).is_err());
        assert!(normalize_unicode_bytes(invalid, Form::Nfkc, true).is_err());
    }

    #[test]
    fn error_messages_are_readable() {
        let err = normalize_confusables_bytes(b"ab\xC0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "input is not valid UTF-8: invalid sequence at byte 2"
        );
    }

    #[test]
    fn compose_inverts_decompose_for_primary_composites() {
        let db = Database::get();
        let mut checked = 0usize;
        for (c, _) in db.canonical_entries() {
            if db.is_composition_excluded(c) {
                continue;
            }
            let mut buf = decompose(&c.to_string(), Decomposition::Canonical);
            compose(&mut buf);
            assert_eq!(&buf[..], [c], "U+{:04X}", c as u32);
            checked += 1;
        }
        assert!(checked > 900, "only {checked} composites checked");
    }

    #[test]
    fn hangul_syllables_round_trip() {
        for cp in 0xAC00u32..0xAC00 + 11172 {
            let c = char::from_u32(cp).unwrap();
            let s = c.to_string();
            let nfd = normalize_unicode(&s, Form::Nfd, false);
            assert!(nfd.chars().count() >= 2);
            assert_eq!(normalize_unicode(&nfd, Form::Nfc, false), s);
        }
    }

    #[test]
    fn database_versions() {
        let db = Database::get();
        assert_eq!(db.unicode_version(), (17, 0, 0));
        assert_eq!(db.confusables_version(), (16, 0, 0));
    }
}
