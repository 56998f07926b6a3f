//! Precondition errors.
//!
//! Every variant here describes a caller bug, not a runtime condition. The
//! panicking entry points (`Signature::var_arg_index`, `ArgumentList::new`,
//! ...) panic with exactly these messages; the `try_` variants hand the
//! value back instead.

use thiserror::Error;

/// Misuse of a [`Signature`](crate::Signature) or the table that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("signature has {count} var-arg slots, a single var-arg index is undefined")]
    AmbiguousVarArg { count: usize },

    #[error("slot {index} is out of range for a signature of length {len}")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("spread shape covers {shape} slots but the supplied signature has {signature}")]
    SpreadLengthMismatch { signature: usize, shape: usize },

    #[error("the global signature table is already initialized")]
    GlobalAlreadyInitialized,
}

/// Misuse of an [`ArgumentList`](crate::ArgumentList).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentsError {
    #[error("argument list has {values} values but its signature has {signature} slots")]
    LengthMismatch { values: usize, signature: usize },
}
