//! Errors shared by every skein layer.
//!
//! An [`Error`] pairs a matchable [`ErrorKind`] with an optional
//! [`ErrorContext`] naming the operations the failure passed through.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// A failed skein operation.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Operations the error passed through, if recorded.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Wraps `kind` with no context.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Replaces the context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records that the error passed through `operation`.
    ///
    /// Frames accumulate innermost first.
    #[must_use]
    pub fn in_operation(mut self, operation: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(operation));
        self
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input(operation: &'static str) -> Self {
        Self::new(ErrorKind::EmptyInput { operation })
    }

    /// Creates a key not found error.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound { key: key.into() })
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// A value of type `actual` showed up where `expected` was needed.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an arithmetic overflow error.
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::new(ErrorKind::Overflow { operation })
    }

    /// Returns true if this is an [`ErrorKind::EmptyInput`] error.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyInput { .. })
    }

    /// Returns true if this is an [`ErrorKind::KeyNotFound`] error.
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::KeyNotFound { .. })
    }

    /// Returns true if this is an [`ErrorKind::IndexOutOfBounds`] error.
    #[must_use]
    pub const fn is_index_out_of_bounds(&self) -> bool {
        matches!(self.kind, ErrorKind::IndexOutOfBounds { .. })
    }
}

/// What went wrong, for matching on.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An operation that needs at least one element got none.
    #[error("{operation} of empty sequence with no initial value")]
    EmptyInput {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// An element has no field or key with the requested name.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// Length of the sequence at the time.
        length: usize,
    },

    /// A value of the wrong type reached an operation.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The type that arrived.
        actual: Type,
    },

    /// Checked integer arithmetic overflowed.
    #[error("integer overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },

    /// Every candidate in a random index range was excluded.
    #[error("no selectable index in [{min}, {max}]")]
    ExhaustedRange {
        /// Lower bound (inclusive).
        min: usize,
        /// Upper bound (inclusive).
        max: usize,
    },

    /// The serializer rejected a value.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// The trail of operations an error passed through.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operations the error passed through, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// An empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(self, frame: impl Into<String>) -> Self {
        let mut stack = self.stack;
        stack.push(frame.into());
        Self { stack }
    }

    /// Returns the outermost operation, if any.
    #[must_use]
    pub fn outermost(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stack
            .iter()
            .try_for_each(|operation| writeln!(f, "  in {operation}"))
    }
}
