use crate::{
    normalize::{Form, is_normalized, normalize},
    stage::{Stage, StageError, map_cow},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Unicode Normalization Form C (Canonical Composition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfcStage;

/// Unicode Normalization Form D (Canonical Decomposition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfdStage;

/// Unicode Normalization Form KC (Compatibility Composition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfkcStage;

/// Unicode Normalization Form KD (Compatibility Decomposition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfkdStage;

pub const NFC: NfcStage = NfcStage;
pub const NFD: NfdStage = NfdStage;
pub const NFKC: NfkcStage = NfkcStage;
pub const NFKD: NfkdStage = NfkdStage;

macro_rules! impl_normalization_stage {
    ($stage:ty, $name:literal, $form:expr) => {
        impl $stage {
            pub const FORM: Form = $form;
        }

        impl Stage for $stage {
            fn name(&self) -> &'static str {
                $name
            }

            #[inline(always)]
            fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
                Ok(!is_normalized(text, $form))
            }

            #[inline(always)]
            fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
                Ok(map_cow(text, |s| normalize(s, $form, false)))
            }
        }
    };
}

impl_normalization_stage!(NfcStage, "nfc", Form::Nfc);
impl_normalization_stage!(NfdStage, "nfd", Form::Nfd);
impl_normalization_stage!(NfkcStage, "nfkc", Form::Nfkc);
impl_normalization_stage!(NfkdStage, "nfkd", Form::Nfkd);

macro_rules! impl_stage_test_config {
    ($type:ty, [$(($input:literal, $expected:literal)),* $(,)?]) => {
        impl StageTestConfig for $type {
            fn samples() -> &'static [&'static str] {
                &["café", "naïve", "e\u{0301}", "ﬁle", "①②③", "한국어", ""]
            }

            fn should_transform() -> &'static [(&'static str, &'static str)] {
                &[$(($input, $expected)),*]
            }
        }
    };
}

impl_stage_test_config!(NfcStage, [("e\u{0301}", "é"), ("\u{212B}", "Å")]);
impl_stage_test_config!(NfdStage, [("é", "e\u{0301}"), ("한", "\u{1112}\u{1161}\u{11AB}")]);
impl_stage_test_config!(NfkcStage, [("ﬁle", "file"), ("①", "1")]);
impl_stage_test_config!(NfkdStage, [("ﬁé", "fie\u{0301}"), ("Ａ", "A")]);

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NFC);
        assert_stage_contract!(NFD);
        assert_stage_contract!(NFKC);
        assert_stage_contract!(NFKD);
    }

    #[test]
    fn samples_include_decomposed() {
        let decomposed = "cafe\u{0301}";
        let nfc = NFC.apply(Cow::Borrowed(decomposed)).unwrap();
        assert_eq!(nfc, "café");
        let nfd = NFD.apply(Cow::Borrowed(&nfc)).unwrap();
        assert_eq!(nfd, decomposed);
    }

    #[test]
    fn compatibility_decomposes_ligatures() {
        let ligature = "ﬁ";
        assert_eq!(NFKC.apply(Cow::Borrowed(ligature)).unwrap(), "fi");
        assert_eq!(NFKD.apply(Cow::Borrowed(ligature)).unwrap(), "fi");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_canonical_nfc_nfd() -> TestResult {
        let text = "cafe\u{0301}";
        assert_eq!(NFC.apply(Cow::Borrowed(text))?, "café");
        assert_eq!(NFD.apply(Cow::Borrowed(text))?, "cafe\u{0301}");
        Ok(())
    }

    #[test]
    fn test_compatibility_nfkc_nfkd() -> TestResult {
        let text = "ﬀﬁ ½ ①";
        assert_eq!(NFKC.apply(Cow::Borrowed(text))?, "fffi 1⁄2 1");
        assert_eq!(NFKD.apply(Cow::Borrowed(text))?, "fffi 1⁄2 1");
        Ok(())
    }

    #[test]
    fn test_idempotency_and_needs_apply() -> TestResult {
        let text = "café naïve ﬁ";
        let stages: Vec<Box<dyn Stage>> =
            vec![Box::new(NFC), Box::new(NFD), Box::new(NFKC), Box::new(NFKD)];

        for stage in stages {
            let once = stage.apply(Cow::Borrowed(text))?;
            let twice = stage.apply(once.clone())?;
            assert_eq!(once, twice, "Stage {} not idempotent", stage.name());
            assert!(!(stage.needs_apply(&once)?));
        }
        Ok(())
    }

    #[test]
    fn test_round_trip_nfc_nfd() -> TestResult {
        let original = "El Niño café naïve";
        let nfd = NFD.apply(Cow::Borrowed(original))?;
        let back_to_nfc = NFC.apply(nfd)?;
        assert_eq!(back_to_nfc, original);
        Ok(())
    }

    #[test]
    fn test_owned_input_keeps_allocation_when_clean() -> TestResult {
        let owned = String::from("already composed é");
        let ptr = owned.as_ptr();
        let out = NFC.apply(Cow::Owned(owned))?;
        assert!(matches!(out, Cow::Owned(_)));
        assert_eq!(out.as_ptr(), ptr);
        Ok(())
    }

    #[test]
    fn test_stage_forms() {
        assert_eq!(NfcStage::FORM, Form::Nfc);
        assert_eq!(NfkdStage::FORM, Form::Nfkd);
        assert_eq!(NFKC.name(), "nfkc");
    }

    #[test]
    fn test_empty_and_ascii() -> TestResult {
        let stages: Vec<Box<dyn Stage>> =
            vec![Box::new(NFC), Box::new(NFD), Box::new(NFKC), Box::new(NFKD)];

        for stage in stages {
            assert_eq!(stage.apply(Cow::Borrowed(""))?, "");
            assert_eq!(stage.apply(Cow::Borrowed("hello world"))?, "hello world");
        }
        Ok(())
    }
}
