// Codepoint predicates and algorithmic ranges that are cheaper as code than as
// tables.

/// Default-ignorable codepoints (Unicode `Default_Ignorable_Code_Point`).
///
/// Covers the invisible characters used to smuggle differences past visual
/// review:
/// - Soft hyphen, combining grapheme joiner, Arabic letter mark
/// - Zero-width space, ZWNJ, ZWJ, LRM/RLM
/// - Bidi embeddings, overrides and isolates
/// - Word joiner and invisible operators
/// - Hangul fillers, Mongolian free variation selectors
/// - Variation selectors (both planes) and tag characters
/// - Byte Order Mark (U+FEFF)
#[inline(always)]
pub const fn is_zero_width(c: char) -> bool {
    let cp = c as u32;

    // Nothing below the soft hyphen qualifies
    if cp < 0x00AD {
        return false;
    }

    matches!(cp,
        0x00AD |
        0x034F |
        0x061C |
        0x115F..=0x1160 |
        0x17B4..=0x17B5 |
        0x180B..=0x180F |
        0x200B..=0x200F |
        0x202A..=0x202E |
        0x2060..=0x206F |
        0x3164 |
        0xFE00..=0xFE0F |
        0xFEFF |
        0xFFA0 |
        0xFFF0..=0xFFF8 |
        0x1BCA0..=0x1BCA3 |
        0x1D173..=0x1D17A |
        0xE0000..=0xE0FFF
    )
}

#[inline]
pub fn contains_zero_width(text: &str) -> bool {
    // every default-ignorable codepoint is encoded in two or more bytes
    !text.is_ascii() && text.chars().any(is_zero_width)
}

// ── Hangul syllable arithmetic (Unicode §3.12) ──

pub const S_BASE: u32 = 0xAC00;
pub const L_BASE: u32 = 0x1100;
pub const V_BASE: u32 = 0x1161;
pub const T_BASE: u32 = 0x11A7;
pub const L_COUNT: u32 = 19;
pub const V_COUNT: u32 = 21;
pub const T_COUNT: u32 = 28;
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

#[inline(always)]
pub const fn is_hangul_syllable(c: char) -> bool {
    let cp = c as u32;
    cp >= S_BASE && cp < S_BASE + S_COUNT
}

/// Vowel or trailing-consonant jamo: the second half of an algorithmic
/// Hangul composition.
#[inline(always)]
pub const fn is_hangul_vt_jamo(c: char) -> bool {
    let cp = c as u32;
    (cp >= V_BASE && cp < V_BASE + V_COUNT) || (cp > T_BASE && cp < T_BASE + T_COUNT)
}

/// Splits a precomposed Hangul syllable into its conjoining jamo.
///
/// Returns `None` for anything outside the syllable block. The trailing
/// consonant slot is `None` for LV syllables.
#[inline]
pub fn decompose_hangul(c: char) -> Option<(char, char, Option<char>)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let s_index = c as u32 - S_BASE;
    let l = char::from_u32(L_BASE + s_index / N_COUNT)?;
    let v = char::from_u32(V_BASE + (s_index % N_COUNT) / T_COUNT)?;
    let t_index = s_index % T_COUNT;
    let t = if t_index == 0 {
        None
    } else {
        Some(char::from_u32(T_BASE + t_index)?)
    };
    Some((l, v, t))
}

/// Algorithmic composition of L+V into LV and LV+T into LVT.
#[inline]
pub fn compose_hangul(a: char, b: char) -> Option<char> {
    let (a, b) = (a as u32, b as u32);
    if (L_BASE..L_BASE + L_COUNT).contains(&a) && (V_BASE..V_BASE + V_COUNT).contains(&b) {
        let lv = S_BASE + ((a - L_BASE) * V_COUNT + (b - V_BASE)) * T_COUNT;
        return char::from_u32(lv);
    }
    if (S_BASE..S_BASE + S_COUNT).contains(&a)
        && (a - S_BASE) % T_COUNT == 0
        && (T_BASE + 1..T_BASE + T_COUNT).contains(&b)
    {
        return char::from_u32(a + (b - T_BASE));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_members() {
        for c in [
            '\u{00AD}', '\u{034F}', '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{2060}',
            '\u{2066}', '\u{FE0F}', '\u{FEFF}', '\u{E0001}', '\u{E0100}',
        ] {
            assert!(is_zero_width(c), "{:04X}", c as u32);
        }
    }

    #[test]
    fn visible_characters_are_not_zero_width() {
        for c in ['a', ' ', '\t', 'é', '\u{0301}', '\u{00A0}', '\u{2028}', '中', '😀'] {
            assert!(!is_zero_width(c), "{:04X}", c as u32);
        }
        assert!(!contains_zero_width("plain ascii"));
        assert!(contains_zero_width("a\u{200D}b"));
    }

    #[test]
    fn hangul_round_trip() {
        // 한 = ᄒ + ᅡ + ᆫ
        assert_eq!(
            decompose_hangul('한'),
            Some(('\u{1112}', '\u{1161}', Some('\u{11AB}')))
        );
        // 가 = ᄀ + ᅡ
        assert_eq!(decompose_hangul('가'), Some(('\u{1100}', '\u{1161}', None)));
        assert_eq!(decompose_hangul('A'), None);

        let lv = compose_hangul('\u{1112}', '\u{1161}');
        assert_eq!(lv, Some('하'));
        assert_eq!(compose_hangul('하', '\u{11AB}'), Some('한'));
        // LVT syllables take no further trailing consonant
        assert_eq!(compose_hangul('한', '\u{11AB}'), None);
        // T_BASE itself is not a trailing consonant
        assert_eq!(compose_hangul('하', '\u{11A7}'), None);
    }
}
