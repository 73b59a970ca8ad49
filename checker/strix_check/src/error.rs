//! The error taxonomy surfaced by validation.

use std::fmt;

use strix_types::TypeDescriptor;
use strix_value::{RuntimeType, Value};
use thiserror::Error;

/// A structural mismatch: the value at `path` does not satisfy the
/// expected descriptor.
///
/// Constructed only at the point of failure; capturing the received value
/// is an `Arc` bump, not a deep copy, so reports built for discarded
/// union probes stay cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct MismatchReport {
    /// Dot/bracket-qualified location of the failing sub-value, rooted at
    /// the label the validation started from (`value` by default).
    pub path: String,
    /// The descriptor the value was checked against. For unions this is
    /// the whole union, not the last option tried.
    pub expected: TypeDescriptor,
    /// The value that failed the check.
    pub received: Value,
}

impl MismatchReport {
    /// Runtime type tag of the received value.
    pub fn received_type(&self) -> RuntimeType {
        self.received.runtime_type()
    }

    /// Multi-line rendering for error surfaces that have room for it.
    pub fn detail(&self) -> String {
        format!(
            "type mismatch\n\
             -------------\n\
             path     : {}\n\
             expected : {}\n\
             received : {}\n\
             value    : {}\n",
            self.path,
            self.expected,
            self.received_type(),
            self.received,
        )
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type mismatch at `{}`: expected `{}`, found `{}` ({})",
            self.path,
            self.expected,
            self.received_type(),
            self.received,
        )
    }
}

/// Result of a validation: success, or exactly one error.
pub type CheckResult = Result<(), CheckError>;

/// Everything a validation can fail with.
///
/// Every variant is synchronous and fatal to the check that raised it;
/// the validator performs no recovery or retry. The process-wide switch
/// ([`disable`](crate::disable)) is the only sanctioned way to suppress
/// checks entirely.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// The value's shape or type does not satisfy the descriptor.
    #[error("{0}")]
    Mismatch(MismatchReport),

    /// A fixed-arity tuple disagreed on length. Reported against the
    /// whole tuple descriptor, not an index.
    #[error(
        "arity mismatch at `{path}`: expected `{expected}` with {expected_len} element(s), \
         found {found_len}"
    )]
    Arity {
        /// Location of the tuple value.
        path: String,
        /// The whole tuple descriptor.
        expected: TypeDescriptor,
        /// Declared arity.
        expected_len: usize,
        /// Received arity.
        found_len: usize,
    },

    /// The classifier met a descriptor it does not recognize. A
    /// configuration error, surfaced on every attempt.
    #[error("unsupported descriptor `{descriptor}` at `{path}`")]
    Unsupported {
        /// Location being checked when classification failed.
        path: String,
        /// The unclassifiable descriptor.
        descriptor: TypeDescriptor,
    },

    /// Descriptor nesting exceeded the configured ceiling.
    #[error("nesting depth limit {limit} exceeded at `{path}`")]
    DepthExceeded {
        /// Location at which the ceiling tripped.
        path: String,
        /// The configured ceiling.
        limit: usize,
    },
}

impl CheckError {
    /// The path the error was raised at.
    pub fn path(&self) -> &str {
        match self {
            CheckError::Mismatch(report) => &report.path,
            CheckError::Arity { path, .. }
            | CheckError::Unsupported { path, .. }
            | CheckError::DepthExceeded { path, .. } => path,
        }
    }
}
