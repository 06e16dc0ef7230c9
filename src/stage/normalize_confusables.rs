use crate::{
    confusables::{contains_confusables, detect, normalize_confusables},
    stage::{Stage, StageError, map_cow},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Replace each confusable character with its prototype; leave every other
/// character untouched.
///
/// Replacements are compatibility-decomposed. Follow with [`NFC`] when the
/// output should be composed.
///
/// [`NFC`]: crate::stage::normalization::NFC
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeConfusables;

pub const NORMALIZE_CONFUSABLES: NormalizeConfusables = NormalizeConfusables;

impl Stage for NormalizeConfusables {
    fn name(&self) -> &'static str {
        "normalize_confusables"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(contains_confusables(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(map_cow(text, normalize_confusables))
    }
}

impl StageTestConfig for NormalizeConfusables {
    fn samples() -> &'static [&'static str] {
        &["pаypаl", "Ηello Wοrld", "ﬁle", "𝐚𝐝𝐦𝐢𝐧", "hello", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "abc def", "café", "日本語", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("pаypаl", "paypal"), ("А", "A"), ("ﬁle", "file"), ("cаfé", "café")]
    }
}

/// Reject text holding any confusable character.
///
/// For policies that refuse look-alike input instead of silently rewriting
/// it. Fails with [`StageError::Validation`] naming the offending characters;
/// never modifies text.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectConfusables;

pub const REJECT_CONFUSABLES: RejectConfusables = RejectConfusables;

impl Stage for RejectConfusables {
    fn name(&self) -> &'static str {
        "reject_confusables"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if !contains_confusables(text) {
            return Ok(false);
        }
        let mut found: Vec<String> = detect(text).into_iter().collect();
        found.sort_unstable();
        Err(StageError::Validation(
            self.name(),
            format!("confusable characters {found:?}"),
        ))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        self.needs_apply(&text)?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NORMALIZE_CONFUSABLES);
    }

    #[test]
    fn accented_text_without_confusables_is_untouched() {
        assert!(!NormalizeConfusables.needs_apply("café").unwrap());
        let out = NormalizeConfusables.apply(Cow::Borrowed("café")).unwrap();
        assert!(matches!(out, Cow::Borrowed("café")));
    }

    #[test]
    fn reject_passes_clean_text() {
        assert!(!RejectConfusables.needs_apply("hello").unwrap());
        let out = RejectConfusables.apply(Cow::Borrowed("hello")).unwrap();
        assert!(matches!(out, Cow::Borrowed("hello")));
    }

    #[test]
    fn reject_names_offenders() {
        let err = RejectConfusables.needs_apply("gооgle").unwrap_err();
        match err {
            StageError::Validation(stage, msg) => {
                assert_eq!(stage, "reject_confusables");
                assert!(msg.contains('о'), "{msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(RejectConfusables.apply(Cow::Borrowed("А")).is_err());
    }
}
