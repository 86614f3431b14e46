//! Error types for request URI construction.

use std::fmt;

/// Error returned when a constructor or builder operation receives an
/// invalid argument.
///
/// Every variant of [`UriErrorKind`] is an "invalid argument" failure: the
/// kind only adds positional context for sequence constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriError {
    /// Name of the rejected argument (`"host"`, `"segment"`, `"field_name"`, ...)
    pub argument: &'static str,
    /// The specific reason the argument was rejected
    pub kind: UriErrorKind,
}

/// Specific reasons an argument is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriErrorKind {
    /// A required string was empty
    Empty,
    /// A path segment in a sequence was empty
    EmptySegment {
        /// Index of the segment in the supplied sequence
        index: usize,
    },
    /// A query parameter in a sequence had an empty field name or value
    EmptyParameter {
        /// Index of the parameter in the supplied sequence
        index: usize,
    },
    /// The port was zero
    ZeroPort,
}

impl UriError {
    pub(crate) fn empty(argument: &'static str) -> Self {
        log::debug!("rejecting empty argument `{argument}`");
        Self {
            argument,
            kind: UriErrorKind::Empty,
        }
    }

    pub(crate) fn zero_port() -> Self {
        log::debug!("rejecting port 0");
        Self {
            argument: "port",
            kind: UriErrorKind::ZeroPort,
        }
    }

    pub(crate) fn empty_segment(index: usize) -> Self {
        log::debug!("rejecting empty path segment at index {index}");
        Self {
            argument: "segment",
            kind: UriErrorKind::EmptySegment { index },
        }
    }

    pub(crate) fn empty_parameter(argument: &'static str, index: usize) -> Self {
        log::debug!("rejecting query parameter at index {index}: empty `{argument}`");
        Self {
            argument,
            kind: UriErrorKind::EmptyParameter { index },
        }
    }
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument '{}': ", self.argument)?;
        match &self.kind {
            UriErrorKind::Empty => write!(f, "value cannot be empty"),
            UriErrorKind::EmptySegment { index } => {
                write!(f, "path segment at index {index} cannot be empty")
            }
            UriErrorKind::EmptyParameter { index } => {
                write!(f, "query parameter at index {index} has an empty {}", self.argument)
            }
            UriErrorKind::ZeroPort => write!(f, "port must be a positive integer"),
        }
    }
}

impl std::error::Error for UriError {}
