//! Composer: canonical composition over a decomposed, canonically ordered
//! buffer.

use crate::data::Database;
use crate::decompose::CharBuf;
use crate::unicode::compose_hangul;

#[inline]
fn compose_pair(db: &Database, starter: char, c: char) -> Option<char> {
    compose_hangul(starter, c).or_else(|| db.composition(starter, c))
}

/// Composes `buf` in place.
///
/// The input must already be decomposed and canonically ordered. Each
/// codepoint is tried against the most recent starter (class 0) unless a
/// codepoint between them blocks it, i.e. has class 0 or a class greater than
/// or equal to its own. Excluded compositions are absent from the table, so
/// they never form.
pub fn compose(buf: &mut CharBuf) {
    let db = Database::get();
    let mut starter: Option<usize> = None;
    let mut last_class = 0u8;
    let mut write = 0;

    for read in 0..buf.len() {
        let c = buf[read];
        let class = db.combining_class(c);

        if let Some(s) = starter {
            let adjacent = write == s + 1;
            let blocked = !adjacent && (last_class == 0 || last_class >= class);
            if !blocked {
                if let Some(composed) = compose_pair(db, buf[s], c) {
                    buf[s] = composed;
                    continue;
                }
            }
        }

        if class == 0 {
            starter = Some(write);
        }
        last_class = class;
        buf[write] = c;
        write += 1;
    }

    buf.truncate(write);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::{Decomposition, decompose};

    fn nfc(s: &str) -> String {
        let mut buf = decompose(s, Decomposition::Canonical);
        compose(&mut buf);
        buf.into_iter().collect()
    }

    #[test]
    fn empty_buffer() {
        let mut buf = CharBuf::new();
        compose(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn composes_base_and_mark() {
        assert_eq!(nfc("e\u{0301}"), "é");
        assert_eq!(nfc("cafe\u{0301}"), "café");
        assert_eq!(nfc("U\u{0308}\u{0304}"), "\u{01D5}");
    }

    #[test]
    fn unblocked_mark_skips_over_other_class() {
        // a + dot below (220) + acute (230): dot below composes first, then ạ
        // has no acute composite, so the acute stays separate
        assert_eq!(nfc("a\u{0323}\u{0301}"), "\u{1EA1}\u{0301}");
        // ệ: e + dot below + circumflex
        assert_eq!(nfc("e\u{0323}\u{0302}"), "\u{1EC7}");
    }

    #[test]
    fn equal_class_blocks() {
        // the grave is blocked by the acute of the same class
        assert_eq!(nfc("a\u{0301}\u{0300}"), "\u{00E1}\u{0300}");
    }

    #[test]
    fn exclusions_stay_decomposed() {
        // U+0958 decomposes canonically but is excluded from recomposition
        assert_eq!(nfc("\u{0958}"), "\u{0915}\u{093C}");
        // singletons map to their target and never come back
        assert_eq!(nfc("\u{212B}"), "\u{00C5}");
        assert_eq!(nfc("\u{2126}"), "\u{03A9}");
    }

    #[test]
    fn leading_non_starters_are_kept() {
        assert_eq!(nfc("\u{0301}e"), "\u{0301}e");
    }

    #[test]
    fn hangul_recomposes() {
        assert_eq!(nfc("\u{1112}\u{1161}\u{11AB}"), "한");
        assert_eq!(nfc("한국어"), "한국어");
        // LV + T composes, stray T after LVT does not
        assert_eq!(nfc("\u{1100}\u{1161}\u{11A8}\u{11A8}"), "\u{AC01}\u{11A8}");
    }

    #[test]
    fn starter_pairs_compose_when_adjacent() {
        // TAMIL VOWEL SIGN O = U+0BC6 + U+0BBE, both class 0
        assert_eq!(nfc("\u{0BC6}\u{0BBE}"), "\u{0BCA}");
    }
}
