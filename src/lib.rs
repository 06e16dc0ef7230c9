//! Confusable-character detection and Unicode normalization.
//!
//! ```
//! use unicode_confusables::{Form, detect_confusables, normalize_confusables, normalize_unicode};
//!
//! // Cyrillic а (U+0430) posing as Latin a
//! assert!(detect_confusables("pаypаl").contains("а"));
//! assert_eq!(normalize_confusables("pаypаl"), "paypal");
//!
//! assert_eq!(normalize_unicode("cafe\u{0301}", Form::Nfc, false), "café");
//! assert_eq!(normalize_unicode("a\u{200D}b", Form::Nfc, true), "ab");
//! ```

pub mod compose;
pub mod confusables;
pub mod data;
pub mod decompose;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod sanitizer;
pub mod stage;
pub mod unicode;
pub mod utf8;

pub mod testing {
    pub mod stage_contract;
}

use std::{borrow::Cow, collections::HashSet};

pub use confusables::{
    are_confusable, contains_confusables, detect as detect_confusables, is_confusable,
    normalize_confusables, skeleton,
};
pub use data::Database;
pub use error::Error;
pub use normalize::{Form, is_normalized, normalize as normalize_unicode, strip_zero_width};
pub use sanitizer::{Sanitizer, SanitizerBuilder};
pub use stage::normalization::{NFC, NFD, NFKC, NFKD};
pub use stage::normalize_confusables::{NormalizeConfusables, RejectConfusables};
pub use stage::strip_zero_width::StripZeroWidth;
pub use stage::{Stage, StageError};

use utf8::validate_utf8;

/// NFKD with optional zero-width stripping.
#[deprecated(note = "use `normalize_unicode(text, Form::Nfkd, strip_zero_width)`")]
pub fn unicode_normalize_kd(text: &str, strip_zero_width: bool) -> Cow<'_, str> {
    normalize_unicode(text, Form::Nfkd, strip_zero_width)
}

/// [`detect_confusables`] over raw bytes, which must be UTF-8.
pub fn detect_confusables_bytes(bytes: &[u8]) -> Result<HashSet<String>, Error> {
    Ok(detect_confusables(validate_utf8(bytes)?))
}

/// [`normalize_confusables`] over raw bytes, which must be UTF-8.
pub fn normalize_confusables_bytes(bytes: &[u8]) -> Result<Cow<'_, str>, Error> {
    Ok(normalize_confusables(validate_utf8(bytes)?))
}

/// [`normalize_unicode`] over raw bytes, which must be UTF-8.
pub fn normalize_unicode_bytes(
    bytes: &[u8],
    form: Form,
    strip_zero_width: bool,
) -> Result<Cow<'_, str>, Error> {
    Ok(normalize_unicode(validate_utf8(bytes)?, form, strip_zero_width))
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
