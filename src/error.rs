//! Crate level error types
//!
//! The predicates themselves are total and never produce errors. Errors only
//! surface from parsing tag names and literals and from registry dispatch.

use crate::registry::FunctionError;
use thiserror::Error;

/// Result type alias for fallible crate operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors produced outside the predicate set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    /// A string did not name any type tag
    #[error("Unknown type tag: '{name}'")]
    UnknownTypeTag {
        /// The rejected name
        name: String,
    },

    /// A value literal could not be parsed
    #[error("Invalid value literal '{input}': {message}")]
    InvalidLiteral {
        /// The rejected input
        input: String,
        /// Parser diagnostic
        message: String,
    },

    /// Registry dispatch failed
    #[error(transparent)]
    Function(#[from] FunctionError),
}
