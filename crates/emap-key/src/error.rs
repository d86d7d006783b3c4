use thiserror::Error;

use crate::key::KeyKind;

/// Errors produced by key conversions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    #[error("key type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: KeyKind, found: KeyKind },

    #[error("key is not a raw primitive: {0}")]
    NotPrimitive(KeyKind),
}

/// Result alias for key conversions.
pub type KeyResult<T> = Result<T, KeyError>;
