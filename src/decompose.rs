//! Decomposer: recursive canonical / compatibility decomposition followed by
//! canonical ordering of combining marks.

use smallvec::SmallVec;

use crate::data::Database;
use crate::unicode::decompose_hangul;

/// Codepoint buffer for decomposed text. Identifiers and short strings stay
/// on the stack.
pub type CharBuf = SmallVec<[char; 64]>;

/// Which decomposition mappings to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decomposition {
    /// Canonical mappings only (NFD, NFC).
    Canonical,
    /// Compatibility mappings, falling back to canonical ones (NFKD, NFKC).
    Compatibility,
}

/// Recursion limit for a single codepoint. The stored tables are fully
/// resolved, so real data never goes past depth 1; hitting the limit means the
/// tables are corrupt and the codepoint is passed through unchanged.
pub const MAX_DECOMPOSITION_DEPTH: usize = 8;

/// Decomposes one codepoint, emitting the result in order. No reordering is
/// done here; see [`canonical_order`].
#[inline]
pub fn decompose_char(c: char, mode: Decomposition, emit: &mut impl FnMut(char)) {
    let db = Database::get();
    let lookup = |c: char| match mode {
        Decomposition::Canonical => db.canonical_decomposition(c),
        Decomposition::Compatibility => db
            .compatibility_decomposition(c)
            .or_else(|| db.canonical_decomposition(c)),
    };
    decompose_with(&lookup, c, 0, emit);
}

fn decompose_with(
    lookup: &impl Fn(char) -> Option<&'static [char]>,
    c: char,
    depth: usize,
    emit: &mut impl FnMut(char),
) {
    // 7-bit ASCII never decomposes
    if c.is_ascii() {
        emit(c);
        return;
    }

    if let Some((l, v, t)) = decompose_hangul(c) {
        emit(l);
        emit(v);
        if let Some(t) = t {
            emit(t);
        }
        return;
    }

    let Some(mapping) = lookup(c) else {
        emit(c);
        return;
    };

    if depth >= MAX_DECOMPOSITION_DEPTH {
        tracing::warn!(
            codepoint = c as u32,
            depth,
            "decomposition depth limit reached, passing codepoint through"
        );
        emit(c);
        return;
    }

    for &d in mapping {
        if d == c {
            emit(d);
        } else {
            decompose_with(lookup, d, depth + 1, emit);
        }
    }
}

/// Stable-sorts every maximal run of non-starters by combining class.
/// Starters (class 0) are run boundaries and never move.
pub fn canonical_order(buf: &mut [char]) {
    let db = Database::get();
    let mut i = 0;
    while i < buf.len() {
        if db.combining_class(buf[i]) == 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < buf.len() && db.combining_class(buf[i]) != 0 {
            i += 1;
        }
        if i - start > 1 {
            buf[start..i].sort_by_key(|&c| db.combining_class(c));
        }
    }
}

/// Appends the fully decomposed, canonically ordered form of `text` to `out`.
pub fn decompose_into(text: &str, mode: Decomposition, out: &mut CharBuf) {
    let start = out.len();
    for c in text.chars() {
        decompose_char(c, mode, &mut |d| out.push(d));
    }
    canonical_order(&mut out[start..]);
}

/// Fully decomposed, canonically ordered codepoints of `text`.
pub fn decompose(text: &str, mode: Decomposition) -> CharBuf {
    let mut out = CharBuf::with_capacity(text.len());
    decompose_into(text, mode, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nfd(s: &str) -> String {
        decompose(s, Decomposition::Canonical).into_iter().collect()
    }

    fn nfkd(s: &str) -> String {
        decompose(s, Decomposition::Compatibility).into_iter().collect()
    }

    #[test]
    fn empty_input() {
        assert!(decompose("", Decomposition::Canonical).is_empty());
        assert!(decompose("", Decomposition::Compatibility).is_empty());
    }

    #[test]
    fn precomposed_latin() {
        assert_eq!(nfd("é"), "e\u{0301}");
        assert_eq!(nfd("café"), "cafe\u{0301}");
        // Ǖ → U + ̈ + ̄ (two levels in the raw data)
        assert_eq!(nfd("\u{01D5}"), "U\u{0308}\u{0304}");
    }

    #[test]
    fn compatibility_subsumes_canonical() {
        assert_eq!(nfkd("ﬁ"), "fi");
        assert_eq!(nfkd("①"), "1");
        assert_eq!(nfkd("Ａ"), "A");
        assert_eq!(nfkd("é"), "e\u{0301}");
        // canonical mode leaves compatibility characters alone
        assert_eq!(nfd("ﬁ"), "ﬁ");
    }

    #[test]
    fn longest_decomposition() {
        // ARABIC LIGATURE SALLALLAHOU ALAYHE WASALLAM
        assert_eq!(
            decompose("\u{FDFA}", Decomposition::Compatibility).len(),
            crate::data::tables::MAX_DECOMPOSITION_LENGTH
        );
    }

    #[test]
    fn hangul_is_algorithmic() {
        assert_eq!(nfd("한"), "\u{1112}\u{1161}\u{11AB}");
        assert_eq!(nfd("가"), "\u{1100}\u{1161}");
    }

    #[test]
    fn marks_are_reordered_by_class() {
        // dot below (220) sorts before acute (230)
        assert_eq!(nfd("a\u{0301}\u{0323}"), "a\u{0323}\u{0301}");
        // equal classes keep their relative order
        assert_eq!(nfd("a\u{0301}\u{0300}"), "a\u{0301}\u{0300}");
        // a starter between marks is a hard boundary
        assert_eq!(nfd("\u{0301}b\u{0323}"), "\u{0301}b\u{0323}");
    }

    #[test]
    fn reordering_applies_across_decomposed_output() {
        // ệ decomposes to e + ̣ + ̂ ; a trailing acute stays last
        assert_eq!(nfd("\u{1EC7}\u{0301}"), "e\u{0323}\u{0302}\u{0301}");
        // ḍ followed by a cedilla-class mark (202) moves it ahead of the dot (220)
        assert_eq!(nfd("\u{1E0D}\u{0327}"), "d\u{0327}\u{0323}");
    }

    #[test]
    fn unmapped_codepoints_pass_through() {
        for s in ["abc", "中文", "😀", "\u{E000}", "\u{10FFFD}"] {
            assert_eq!(nfd(s), s);
            assert_eq!(nfkd(s), s);
        }
    }

    #[test]
    fn decomposition_is_idempotent() {
        for s in ["Ǖ", "ﬃ ½ ㎒", "한국어", "ệ\u{0301}", "Å Ω K"] {
            let once = nfkd(s);
            assert_eq!(nfkd(&once), once);
            let once = nfd(s);
            assert_eq!(nfd(&once), once);
        }
    }

    #[test]
    fn cyclic_mapping_stops_at_depth_limit() {
        static ALPHA: [char; 1] = ['β'];
        static BETA: [char; 1] = ['α'];
        let lookup = |c: char| match c {
            'α' => Some(&ALPHA[..]),
            'β' => Some(&BETA[..]),
            _ => None,
        };

        let mut out = Vec::new();
        decompose_with(&lookup, 'α', 0, &mut |d| out.push(d));
        // α and β alternate; the limit is even, so α is passed through
        assert_eq!(out, ['α']);

        let mut out = Vec::new();
        decompose_with(&lookup, 'β', 0, &mut |d| out.push(d));
        assert_eq!(out, ['β']);
    }

    #[test]
    fn growing_mapping_is_bounded() {
        // each level doubles, so an unguarded walk would never finish
        static GAMMA: [char; 2] = ['δ', 'δ'];
        static DELTA: [char; 2] = ['γ', 'γ'];
        let lookup = |c: char| match c {
            'γ' => Some(&GAMMA[..]),
            'δ' => Some(&DELTA[..]),
            _ => None,
        };

        let mut count = 0usize;
        decompose_with(&lookup, 'γ', 0, &mut |_| count += 1);
        assert_eq!(count, 1 << MAX_DECOMPOSITION_DEPTH);
    }

    #[test]
    fn decompose_into_appends() {
        let mut out = CharBuf::new();
        out.push('x');
        decompose_into("é", Decomposition::Canonical, &mut out);
        assert_eq!(&out[..], ['x', 'e', '\u{0301}']);
    }
}
