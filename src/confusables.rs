//! Confusable detection and skeleton normalization.
//!
//! A character is *confusable* when it, or any codepoint of its compatibility
//! decomposition, has an entry in the skeleton table. The skeleton of a
//! string is its NFKD form with every codepoint replaced by its table target
//! and the marks canonically reordered. Two strings that look alike to a
//! reader share a skeleton.
//!
//! [`normalize_confusables`] works per character: confusable characters are
//! replaced by their own skeleton and everything else is copied as is.
//!
//! Every table target is itself NFKD-stable and holds no further table keys,
//! so a single pass is enough and both rewrites are idempotent.

use std::{borrow::Cow, collections::HashSet};

use crate::{
    data::Database,
    decompose::{CharBuf, Decomposition, canonical_order, decompose_char, decompose_into},
};

/// `true` if `c` would be rewritten by [`normalize_confusables`].
pub fn is_confusable(c: char) -> bool {
    let db = Database::get();
    if db.has_skeleton(c) {
        return true;
    }
    if c.is_ascii() {
        return false;
    }
    let mut found = false;
    decompose_char(c, Decomposition::Compatibility, &mut |d| {
        found |= db.has_skeleton(d);
    });
    found
}

/// The distinct characters of `text` that are confusable.
///
/// Each element is a one-character string. Order is unspecified.
pub fn detect(text: &str) -> HashSet<String> {
    let found: HashSet<char> = text.chars().filter(|&c| is_confusable(c)).collect();
    found.into_iter().map(String::from).collect()
}

#[inline]
pub fn contains_confusables(text: &str) -> bool {
    text.chars().any(is_confusable)
}

/// Replaces every table key in `decomposed` by its target and restores
/// canonical order.
fn map_skeleton(db: &Database, decomposed: CharBuf) -> CharBuf {
    let mut mapped = CharBuf::with_capacity(decomposed.len());
    for c in decomposed {
        match db.skeleton_of(c) {
            Some(target) => mapped.extend_from_slice(target),
            None => mapped.push(c),
        }
    }
    canonical_order(&mut mapped);
    mapped
}

/// The skeleton of `text`, computed unconditionally.
pub fn skeleton(text: &str) -> String {
    let mut decomposed = CharBuf::with_capacity(text.len());
    decompose_into(text, Decomposition::Compatibility, &mut decomposed);
    map_skeleton(Database::get(), decomposed).into_iter().collect()
}

/// Replaces each confusable character with its prototype.
///
/// Only confusable characters change; each becomes its own skeleton and every
/// other character is copied unchanged, so a spoofed string and the string it
/// imitates come out equal. Text with no confusable characters comes back
/// borrowed.
pub fn normalize_confusables(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_confusable) else {
        return Cow::Borrowed(text);
    };

    let db = Database::get();
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        if !is_confusable(c) {
            out.push(c);
            continue;
        }
        let mut decomposed = CharBuf::new();
        decompose_char(c, Decomposition::Compatibility, &mut |d| decomposed.push(d));
        out.extend(map_skeleton(db, decomposed));
    }
    Cow::Owned(out)
}

/// `true` when `a` and `b` render alike, i.e. share a skeleton.
pub fn are_confusable(a: &str, b: &str) -> bool {
    a == b || skeleton(a) == skeleton(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cyrillic_homoglyphs() {
        assert_eq!(detect("pаypаl"), set(&["а"]));
        assert_eq!(normalize_confusables("pаypаl"), "paypal");
        assert_eq!(normalize_confusables("А"), "A");
        assert!(is_confusable('\u{0430}'));
    }

    #[test]
    fn clean_ascii_is_borrowed() {
        for text in ["", "hello", "Hello World", "abc def"] {
            assert!(detect(text).is_empty(), "{text}");
            assert!(matches!(normalize_confusables(text), Cow::Borrowed(_)));
        }
    }

    #[test]
    fn ascii_keys_are_flagged() {
        // `m` reads as `rn`; `I` and `1` read as `l`
        assert!(is_confusable('m'));
        assert!(is_confusable('I'));
        assert!(is_confusable('1'));
        assert!(!is_confusable('a'));
        assert!(!is_confusable('l'));
        assert_eq!(normalize_confusables("m"), "rn");
        assert_eq!(normalize_confusables("I1l"), "lll");
    }

    #[test]
    fn compatibility_forms_are_flagged() {
        assert_eq!(detect("ﬁle"), set(&["ﬁ"]));
        assert_eq!(normalize_confusables("ﬁle"), "file");
        assert_eq!(normalize_confusables("𝐚𝐝𝐦𝐢𝐧"), "adrnin");
    }

    #[test]
    fn accents_are_preserved() {
        // é has no confusable component and is left alone
        assert!(!is_confusable('é'));
        assert_eq!(normalize_confusables("é"), "é");
        // č decomposes to c + caron; the caron has a prototype of its own
        assert_eq!(normalize_confusables("č"), "c\u{0306}");
    }

    #[test]
    fn only_confusable_characters_are_rewritten() {
        // é is kept precomposed next to a folded Cyrillic а
        assert_eq!(normalize_confusables("cаfé"), normalize_confusables("café"));
        assert_eq!(normalize_confusables("cаfé"), "café");
        assert_eq!(normalize_confusables("\u{0430}é\u{FF21}"), "aéA");
        assert_eq!(normalize_confusables("\u{0441}afé \u{043E}ñ"), "café oñ");
    }

    #[test]
    fn spoofed_and_genuine_agree() {
        for (genuine, spoof) in [
            ("paypal", "p\u{0430}yp\u{0430}l"),
            ("naïve Hello", "naïve \u{0397}ello"),
            ("resumé", "r\u{0435}sumé"),
            ("café oñ", "\u{0441}afé \u{043E}ñ"),
        ] {
            assert_eq!(normalize_confusables(spoof), normalize_confusables(genuine), "{spoof}");
        }
    }

    #[test]
    fn detect_deduplicates() {
        assert_eq!(detect("аааа").len(), 1);
        assert_eq!(detect("АВС"), set(&["А", "В", "С"]));
    }

    #[test]
    fn skeleton_is_idempotent() {
        for text in ["pаypаl", "𝐚𝐝𝐦𝐢𝐧", "č", "ﬃ①", "Ⅰ|l", "hello"] {
            let once = skeleton(text);
            assert_eq!(skeleton(&once), once, "{text}");
        }
    }

    #[test]
    fn confusable_pairs() {
        assert!(are_confusable("paypal", "pаypаl"));
        assert!(are_confusable("rn", "m"));
        assert!(are_confusable("l", "I"));
        assert!(!are_confusable("paypal", "paypa1x"));
        assert!(are_confusable("", ""));
    }
}
