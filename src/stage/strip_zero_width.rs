use crate::{
    normalize::strip_zero_width,
    stage::{Stage, StageError, map_cow},
    testing::stage_contract::StageTestConfig,
    unicode::contains_zero_width,
};
use std::borrow::Cow;

/// Remove every default-ignorable (zero-width) codepoint.
///
/// Strips the invisible characters that let two visually identical strings
/// compare unequal:
/// - Zero-width space, ZWNJ, ZWJ, word joiner
/// - Bidirectional marks, embeddings, overrides and isolates
/// - Byte Order Mark (U+FEFF)
/// - Variation selectors and tag characters
///
/// Zero-copy when clean. Idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripZeroWidth;

pub const STRIP_ZERO_WIDTH: StripZeroWidth = StripZeroWidth;

impl Stage for StripZeroWidth {
    fn name(&self) -> &'static str {
        "strip_zero_width"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(contains_zero_width(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(map_cow(text, strip_zero_width))
    }
}

impl StageTestConfig for StripZeroWidth {
    fn samples() -> &'static [&'static str] {
        &[
            "hello\u{200B}world",
            "\u{FEFF}bommed",
            "Arabic\u{200F}text",
            "a\u{2066}b\u{2069}c",
            "emoji\u{FE0F}",
            "clean text",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["clean text", "hello world", "test123", "café", "日本語", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello\u{200B}world", "helloworld"),
            ("\u{FEFF}text", "text"),
            ("a\u{200E}b", "ab"),
            ("pay\u{200D}pal", "paypal"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(STRIP_ZERO_WIDTH);
    }

    #[test]
    fn only_invisibles_are_removed() {
        let out = StripZeroWidth
            .apply(Cow::Borrowed("a\u{00AD}b\u{034F}c\u{E0041}d"))
            .unwrap();
        assert_eq!(out, "abcd");
        // combining marks are visible and survive
        let out = StripZeroWidth.apply(Cow::Borrowed("e\u{0301}\u{200B}")).unwrap();
        assert_eq!(out, "e\u{0301}");
    }

    #[test]
    fn all_zero_width_input_becomes_empty() {
        let out = StripZeroWidth
            .apply(Cow::Borrowed("\u{200B}\u{200C}\u{200D}\u{FEFF}"))
            .unwrap();
        assert_eq!(out, "");
    }
}
