//! Error types for the Hive wire codec and digest pipeline.
//!
//! Every fallible operation in this crate returns an [`Error`]. Low-level codec
//! failures are never recovered locally: they unwind to the serializer or the
//! digest pipeline, which wrap them in [`Error::Serialization`] so the caller
//! sees exactly one failure per invocation and never partial output.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error returned by a pluggable hash function.
pub type HashError = Box<dyn std::error::Error + Send + Sync>;

/// What the serializer was encoding when a field encoder failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A transaction payload.
    Transaction,
    /// A block header payload.
    Block,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transaction => write!(f, "transaction"),
            Self::Block => write!(f, "block"),
        }
    }
}

/// Errors produced while encoding or digesting protocol objects.
#[derive(Debug, Error)]
pub enum Error {
    /// A malformed argument: illegal capacity, non-finite amount, bad precision.
    #[error("validation error: {0}")]
    Validation(String),

    /// An offset or length outside the buffer bounds, or truncated/overlong data.
    #[error("range error: {0}")]
    Range(String),

    /// The asset symbol is not one the protocol defines.
    #[error("unknown asset symbol: {0}")]
    UnknownSymbol(String),

    /// The asset carries a different symbol than the caller required.
    #[error("invalid asset, expected symbol: {expected} got: {got}")]
    SymbolMismatch {
        /// The symbol the caller asked for.
        expected: String,
        /// The symbol actually present.
        got: String,
    },

    /// The operation kind is absent from the registry.
    #[error("unknown operation kind: {0}")]
    UnknownOperationKind(String),

    /// A textual public key could not be decoded.
    #[error("invalid public key: {0}")]
    Decode(String),

    /// The injected hash function failed.
    #[error("hash function failed: {0}")]
    Hash(#[source] HashError),

    /// A JSON document did not match the expected shape.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// Umbrella failure raised at the serializer boundary.
    #[error("unable to serialize {target}: {source}")]
    Serialization {
        /// What was being serialized.
        target: Target,
        /// The field encoder failure that aborted the encode.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap a field encoder failure at the serializer boundary.
    pub fn serialization(target: Target, source: Error) -> Self {
        Self::Serialization {
            target,
            source: Box::new(source),
        }
    }

    /// The innermost cause, unwrapping any serializer boundary.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Serialization { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
