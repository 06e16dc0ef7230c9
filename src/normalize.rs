//! Unicode normalization: NFC, NFD, NFKC and NFKD, with optional removal of
//! zero-width characters.

use std::{borrow::Cow, fmt, str::FromStr};

use thiserror::Error;

use crate::{
    compose::compose,
    data::Database,
    decompose::{CharBuf, Decomposition, decompose_into},
    unicode::{contains_zero_width, is_hangul_syllable, is_hangul_vt_jamo, is_zero_width},
};

/// One of the four Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Form {
    /// Canonical decomposition followed by canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl Form {
    pub const ALL: [Form; 4] = [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd];

    /// Upper-case name: `"NFC"`, `"NFD"`, `"NFKC"` or `"NFKD"`.
    pub const fn name(self) -> &'static str {
        match self {
            Form::Nfc => "NFC",
            Form::Nfd => "NFD",
            Form::Nfkc => "NFKC",
            Form::Nfkd => "NFKD",
        }
    }

    #[inline]
    pub const fn decomposition(self) -> Decomposition {
        match self {
            Form::Nfc | Form::Nfd => Decomposition::Canonical,
            Form::Nfkc | Form::Nfkd => Decomposition::Compatibility,
        }
    }

    #[inline]
    pub const fn composes(self) -> bool {
        matches!(self, Form::Nfc | Form::Nfkc)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown normalization form `{0}` (expected NFC, NFD, NFKC or NFKD)")]
pub struct ParseFormError(pub String);

impl FromStr for Form {
    type Err = ParseFormError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Form::ALL
            .into_iter()
            .find(|form| form.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFormError(s.to_owned()))
    }
}

/// Answer of the UAX #15 quick check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickCheck {
    Yes,
    No,
    /// Only a full normalization pass can tell.
    Maybe,
}

/// Single scan over `text` without allocating.
///
/// `No` on the first misordered mark or on a character that can never appear
/// in `form`. `Maybe` when some character could compose with its
/// predecessor. The decomposed forms never answer `Maybe`.
pub fn quick_check(text: &str, form: Form) -> QuickCheck {
    let db = Database::get();
    let compatibility = form.decomposition() == Decomposition::Compatibility;
    let mut last_class = 0u8;
    let mut result = QuickCheck::Yes;

    for c in text.chars() {
        if c.is_ascii() {
            last_class = 0;
            continue;
        }

        let class = db.combining_class(c);
        if class != 0 && last_class > class {
            return QuickCheck::No;
        }

        if compatibility && db.compatibility_decomposition(c).is_some() {
            return QuickCheck::No;
        }
        if form.composes() {
            if db.is_composition_excluded(c) && db.canonical_decomposition(c).is_some() {
                return QuickCheck::No;
            }
            if db.composes_with_previous(c) || is_hangul_vt_jamo(c) {
                result = QuickCheck::Maybe;
            }
        } else if is_hangul_syllable(c) || db.canonical_decomposition(c).is_some() {
            return QuickCheck::No;
        }

        last_class = class;
    }

    result
}

/// Normalizes `text` to `form`, optionally dropping every zero-width
/// character afterwards.
///
/// Returns the input borrowed when nothing changes. Text that passes the
/// [`quick_check`] and holds nothing to strip is returned without building a
/// buffer.
pub fn normalize(text: &str, form: Form, strip_zero_width: bool) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    if quick_check(text, form) == QuickCheck::Yes
        && !(strip_zero_width && contains_zero_width(text))
    {
        return Cow::Borrowed(text);
    }

    let mut buf = CharBuf::with_capacity(text.len());
    decompose_into(text, form.decomposition(), &mut buf);
    if form.composes() {
        compose(&mut buf);
    }
    if strip_zero_width {
        buf.retain(|c| !is_zero_width(*c));
    }

    if buf.iter().copied().eq(text.chars()) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(buf.into_iter().collect())
    }
}

/// `true` when `text` is already in `form`. Falls back to a full pass only
/// when the [`quick_check`] answers `Maybe`.
#[inline]
pub fn is_normalized(text: &str, form: Form) -> bool {
    match quick_check(text, form) {
        QuickCheck::Yes => true,
        QuickCheck::No => false,
        QuickCheck::Maybe => matches!(normalize(text, form, false), Cow::Borrowed(_)),
    }
}

/// Removes zero-width characters without any other normalization.
pub fn strip_zero_width(text: &str) -> Cow<'_, str> {
    if !contains_zero_width(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|&c| !is_zero_width(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_parses_case_insensitively() {
        assert_eq!("nfkc".parse::<Form>(), Ok(Form::Nfkc));
        assert_eq!("NFD".parse::<Form>(), Ok(Form::Nfd));
        assert_eq!("Nfc".parse::<Form>(), Ok(Form::Nfc));
        assert_eq!(" nfkd ".parse::<Form>(), Ok(Form::Nfkd));
        assert!("NFX".parse::<Form>().is_err());
        assert!("".parse::<Form>().is_err());
    }

    #[test]
    fn form_display_round_trips() {
        for form in Form::ALL {
            assert_eq!(form.to_string().parse::<Form>(), Ok(form));
        }
    }

    #[test]
    fn ligature_and_fullwidth() {
        assert_eq!(normalize("ﬁ", Form::Nfkc, false), "fi");
        assert_eq!(normalize("ﬁ", Form::Nfc, false), "ﬁ");
        assert_eq!(normalize("Ｈｅｌｌｏ", Form::Nfkc, false), "Hello");
    }

    #[test]
    fn composition_round_trip() {
        assert_eq!(normalize("cafe\u{0301}", Form::Nfc, false), "café");
        assert_eq!(normalize("café", Form::Nfd, false), "cafe\u{0301}");
        assert_eq!(normalize("café", Form::Nfkd, false), "cafe\u{0301}");
    }

    #[test]
    fn zero_width_is_stripped_on_request() {
        let text = "pay\u{200B}pal";
        assert_eq!(normalize(text, Form::Nfc, false), text);
        assert_eq!(normalize(text, Form::Nfc, true), "paypal");
        assert_eq!(normalize("\u{FEFF}ﬁ", Form::Nfkc, true), "fi");
    }

    #[test]
    fn unchanged_input_is_borrowed() {
        for text in ["", "hello", "café", "한국어", "日本語"] {
            assert!(matches!(normalize(text, Form::Nfc, true), Cow::Borrowed(_)));
        }
        assert!(matches!(normalize("e\u{0301}", Form::Nfc, false), Cow::Owned(_)));
        assert!(matches!(strip_zero_width("abc"), Cow::Borrowed(_)));
        assert!(matches!(strip_zero_width("日本"), Cow::Borrowed(_)));
    }

    #[test]
    fn is_normalized_per_form() {
        assert!(is_normalized("café", Form::Nfc));
        assert!(!is_normalized("café", Form::Nfd));
        assert!(is_normalized("cafe\u{0301}", Form::Nfd));
        assert!(is_normalized("ﬁ", Form::Nfc));
        assert!(!is_normalized("ﬁ", Form::Nfkc));
        assert!(is_normalized("", Form::Nfkd));
    }

    #[test]
    fn quick_check_answers() {
        use QuickCheck::*;
        assert_eq!(quick_check("", Form::Nfc), Yes);
        assert_eq!(quick_check("café 日本語 한국어", Form::Nfc), Yes);
        assert_eq!(quick_check("café", Form::Nfd), No);
        assert_eq!(quick_check("한", Form::Nfkd), No);
        assert_eq!(quick_check("cafe\u{0301}", Form::Nfd), Yes);
        assert_eq!(quick_check("cafe\u{0301}", Form::Nfc), Maybe);
        // dot below (220) after acute (230) is out of order in every form
        for form in Form::ALL {
            assert_eq!(quick_check("a\u{0301}\u{0323}", form), No);
        }
        // excluded composite and compatibility character
        assert_eq!(quick_check("\u{212B}", Form::Nfc), No);
        assert_eq!(quick_check("ﬁ", Form::Nfc), Yes);
        assert_eq!(quick_check("ﬁ", Form::Nfkc), No);
        // a vowel jamo may join the syllable before it
        assert_eq!(quick_check("\u{1100}\u{1161}", Form::Nfc), Maybe);
        // Tamil AA is a starter that composes with a preceding E
        assert_eq!(quick_check("\u{0BC6}\u{0BBE}", Form::Nfc), Maybe);
    }

    #[test]
    fn quick_check_never_contradicts_normalize() {
        for text in ["café", "e\u{0301}", "ﬁ①", "Å", "한\u{11A8}", "\u{0958}", "a\u{0323}\u{0301}"] {
            for form in Form::ALL {
                let full = matches!(normalize(text, form, false), Cow::Borrowed(_));
                match quick_check(text, form) {
                    QuickCheck::Yes => assert!(full, "{text:?} {form}"),
                    QuickCheck::No => assert!(!full, "{text:?} {form}"),
                    QuickCheck::Maybe => {}
                }
                assert_eq!(is_normalized(text, form), full, "{text:?} {form}");
            }
        }
    }

    #[test]
    fn strip_zero_width_only_removes_invisibles() {
        assert_eq!(strip_zero_width("a\u{200D}b\u{2066}c\u{FE0F}"), "abc");
        assert_eq!(strip_zero_width("e\u{0301}"), "e\u{0301}");
    }
}
