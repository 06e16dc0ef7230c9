use thiserror::Error;

use crate::stage::StageError;

/// Crate-level error.
///
/// The string operations are total and never fail. Errors only come from the
/// byte-oriented entry points and from user-supplied stages.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input is not valid UTF-8: invalid sequence at byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },

    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}
