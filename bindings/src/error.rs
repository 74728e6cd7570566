use engine::RuntimeError;
use thiserror::Error;
use values::ValueKind;

/// Argument unpacking and return-slot failures, reported before any
/// embedding operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("argument {index} is missing")]
    Missing { index: usize },

    #[error("argument {index} is not of expected kind {expected} (got {actual})")]
    TypeMismatch {
        index: usize,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("argument {index} is a negative count ({value})")]
    NegativeCount { index: usize, value: i64 },

    #[error("return slot already set")]
    ReturnAlreadySet,
}

/// Everything a thunk dispatch can fail with: a binding-level failure, a
/// forwarded embedding error (propagated unchanged), or an unknown name.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no thunk registered under {0:?}")]
    UnknownThunk(String),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
