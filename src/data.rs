//! Codepoint Database.
//!
//! All tables live in [`tables`] as `phf` maps compiled into the binary. They
//! are immutable, so the only runtime state is the [`Database`] handle, which
//! is created once per process behind a `LazyLock` and logs its shape on first
//! use.

pub mod tables;

use std::sync::LazyLock;

use tables::{
    CANONICAL_DECOMPOSITION, COMBINING_CLASS, COMPATIBILITY_DECOMPOSITION, COMPOSITION,
    COMPOSITION_EXCLUSIONS, COMPOSITION_SECONDS, CONFUSABLES_VERSION, SKELETON, UNICODE_VERSION,
};

static DATABASE: LazyLock<Database> = LazyLock::new(|| {
    let db = Database { _private: () };
    tracing::debug!(
        unicode = ?UNICODE_VERSION,
        confusables = ?CONFUSABLES_VERSION,
        canonical = CANONICAL_DECOMPOSITION.len(),
        compatibility = COMPATIBILITY_DECOMPOSITION.len(),
        combining = COMBINING_CLASS.len(),
        compositions = COMPOSITION.len(),
        exclusions = COMPOSITION_EXCLUSIONS.len(),
        skeletons = SKELETON.len(),
        "codepoint database initialized"
    );
    db
});

/// Read-only view over the generated Unicode tables.
///
/// Obtain it through [`Database::get`]. Every lookup is a perfect-hash probe
/// with no allocation.
#[derive(Debug)]
pub struct Database {
    _private: (),
}

impl Database {
    /// The process-wide instance. Initialized at most once, on first call.
    #[inline]
    pub fn get() -> &'static Database {
        &DATABASE
    }

    #[inline]
    pub fn unicode_version(&self) -> (u8, u8, u8) {
        UNICODE_VERSION
    }

    #[inline]
    pub fn confusables_version(&self) -> (u8, u8, u8) {
        CONFUSABLES_VERSION
    }

    /// Canonical decomposition of `c`, if it has one.
    #[inline]
    pub fn canonical_decomposition(&self, c: char) -> Option<&'static [char]> {
        CANONICAL_DECOMPOSITION.get(&c).copied()
    }

    /// Compatibility decomposition of `c`. Only characters whose compatibility
    /// mapping differs from the canonical one are stored here.
    #[inline]
    pub fn compatibility_decomposition(&self, c: char) -> Option<&'static [char]> {
        COMPATIBILITY_DECOMPOSITION.get(&c).copied()
    }

    /// Canonical combining class; 0 for starters and unknown codepoints.
    #[inline]
    pub fn combining_class(&self, c: char) -> u8 {
        if c < '\u{0300}' {
            return 0;
        }
        COMBINING_CLASS.get(&c).copied().unwrap_or(0)
    }

    /// Primary composite for the pair. Excluded compositions never appear.
    #[inline]
    pub fn composition(&self, starter: char, mark: char) -> Option<char> {
        COMPOSITION.get(&(starter, mark)).copied()
    }

    #[inline]
    pub fn is_composition_excluded(&self, c: char) -> bool {
        COMPOSITION_EXCLUSIONS.contains(&c)
    }

    /// `true` when `c` can combine with a preceding character through the
    /// composition table. Hangul jamo are handled algorithmically and are not
    /// listed.
    #[inline]
    pub fn composes_with_previous(&self, c: char) -> bool {
        COMPOSITION_SECONDS.contains(&c)
    }

    /// Skeleton replacement for `c`. `None` means `c` is its own skeleton.
    #[inline]
    pub fn skeleton_of(&self, c: char) -> Option<&'static [char]> {
        SKELETON.get(&c).copied()
    }

    #[inline]
    pub fn has_skeleton(&self, c: char) -> bool {
        SKELETON.contains_key(&c)
    }

    /// Iterates every (codepoint, canonical decomposition) entry.
    pub fn canonical_entries(&self) -> impl Iterator<Item = (char, &'static [char])> {
        CANONICAL_DECOMPOSITION.entries().map(|(&c, &d)| (c, d))
    }

    /// Iterates every (codepoint, skeleton) entry.
    pub fn skeleton_entries(&self) -> impl Iterator<Item = (char, &'static [char])> {
        SKELETON.entries().map(|(&c, &s)| (c, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_hit_known_entries() {
        let db = Database::get();
        assert_eq!(db.canonical_decomposition('é'), Some(&['e', '\u{0301}'][..]));
        assert_eq!(db.compatibility_decomposition('ﬁ'), Some(&['f', 'i'][..]));
        assert_eq!(db.combining_class('\u{0301}'), 230);
        assert_eq!(db.combining_class('\u{0327}'), 202);
        assert_eq!(db.combining_class('a'), 0);
        assert_eq!(db.composition('e', '\u{0301}'), Some('é'));
        assert_eq!(db.skeleton_of('\u{0410}'), Some(&['A'][..]));
    }

    #[test]
    fn absent_entries_are_identity() {
        let db = Database::get();
        assert_eq!(db.canonical_decomposition('A'), None);
        assert_eq!(db.compatibility_decomposition('A'), None);
        assert_eq!(db.skeleton_of('A'), None);
        assert_eq!(db.composition('A', 'B'), None);
        // unassigned codepoint
        assert_eq!(db.combining_class('\u{E0FFF}'), 0);
        assert_eq!(db.skeleton_of('\u{10FFFF}'), None);
    }

    #[test]
    fn exclusions_never_compose() {
        let db = Database::get();
        // U+0958 DEVANAGARI LETTER QA is on the exclusion list
        assert!(db.is_composition_excluded('\u{0958}'));
        assert_eq!(db.composition('\u{0915}', '\u{093C}'), None);
        // singleton: ANGSTROM SIGN
        assert!(db.is_composition_excluded('\u{212B}'));
        assert!(!db.is_composition_excluded('é'));
    }

    #[test]
    fn composition_seconds_match_the_pair_table() {
        let db = Database::get();
        assert!(db.composes_with_previous('\u{0301}'));
        // TAMIL VOWEL SIGN AA is a starter that still composes
        assert!(db.composes_with_previous('\u{0BBE}'));
        assert!(!db.composes_with_previous('e'));
        for (&(_, second), _) in tables::COMPOSITION.entries() {
            assert!(db.composes_with_previous(second), "{second:?}");
        }
    }

    #[test]
    fn same_instance_every_time() {
        assert!(std::ptr::eq(Database::get(), Database::get()));
    }

    #[test]
    fn skeleton_targets_are_closed() {
        let db = Database::get();
        for (c, target) in db.skeleton_entries() {
            assert_ne!(target, &[c][..], "identity entry for {c:?}");
            for &t in target {
                assert!(!db.has_skeleton(t), "{c:?} maps to {t:?} which maps again");
            }
        }
    }
}
