//! Composable text stages.
//!
//! A [`Stage`] is one step of a [`Pipeline`](crate::pipeline::Pipeline).
//! Stages are zero-copy: `needs_apply` is a cheap pre-check, and `apply` hands
//! back the borrowed input whenever nothing changes.

pub mod normalization;
pub mod normalize_confusables;
pub mod strip_zero_width;

use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("stage `{0}` failed: {1}")]
    Failed(&'static str, String),

    #[error("stage `{0}` rejected input: {1}")]
    Validation(&'static str, String),
}

/// A single text transformation.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called on text for which `needs_apply` is `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError>;
}

/// Runs a borrowing transform over a `Cow`, keeping the original allocation
/// when the transform reports no change.
#[inline]
pub(crate) fn map_cow<'a>(text: Cow<'a, str>, f: impl Fn(&str) -> Cow<'_, str>) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => f(s),
        Cow::Owned(s) => {
            let changed = match f(&s) {
                Cow::Owned(out) => Some(out),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(changed.unwrap_or(s))
        }
    }
}
