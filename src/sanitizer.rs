use crate::{
    error::Error,
    pipeline::Pipeline,
    stage::{
        Stage,
        normalization::{NFC, NFKC},
        normalize_confusables::{NORMALIZE_CONFUSABLES, REJECT_CONFUSABLES},
        strip_zero_width::STRIP_ZERO_WIDTH,
    },
    utf8::validate_utf8,
};
use std::{borrow::Cow, sync::Arc};

/// A caller policy: an ordered set of stages applied to every input.
///
/// ```
/// use unicode_confusables::{Sanitizer, stage::normalization::NFC};
///
/// let sanitizer = Sanitizer::builder().add_stage(NFC).build();
/// assert_eq!(sanitizer.process("cafe\u{0301}").unwrap(), "café");
/// ```
#[derive(Debug, Clone)]
pub struct Sanitizer {
    pipeline: Pipeline,
}

impl Sanitizer {
    pub fn builder() -> SanitizerBuilder {
        SanitizerBuilder::default()
    }

    /// Identifier policy: NFKC, strip zero-width characters, replace
    /// confusable characters with their prototypes, then recompose with NFC.
    /// The last step joins a folded letter with the marks after it, so
    /// Cyrillic `а` + U+0301 ends up as the same `á` as the Latin original.
    /// The result is a fixed point of the policy.
    pub fn identifier() -> Self {
        Self::builder()
            .add_stage(NFKC)
            .add_stage(STRIP_ZERO_WIDTH)
            .add_stage(NORMALIZE_CONFUSABLES)
            .add_stage(NFC)
            .build()
    }

    pub fn process<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, Error> {
        Ok(self.pipeline.process(Cow::Borrowed(text))?)
    }

    /// Validates `bytes` as UTF-8 before processing.
    pub fn process_bytes<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, Error> {
        let text = validate_utf8(bytes)?;
        self.process(text)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names().collect()
    }
}

#[derive(Default)]
pub struct SanitizerBuilder {
    stages: Vec<Arc<dyn Stage>>,
}

impl SanitizerBuilder {
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Appends a final check that fails on any remaining confusable
    /// character instead of rewriting it.
    pub fn reject_confusables(self) -> Self {
        self.add_stage(REJECT_CONFUSABLES)
    }

    pub fn build(self) -> Sanitizer {
        Sanitizer {
            pipeline: Pipeline::new(self.stages),
        }
    }
}
