//! Error handling and diagnostics for the Ember language
//!
//! This module provides the error types shared by the front end and by
//! host programs embedding it.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for Ember operations
pub type EmberResult<T> = Result<T, EmberError>;

/// Main error type for the Ember language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmberError {
    /// The scanner hit a character outside every recognized class
    UnrecognizedCharacter {
        character: char,
        /// Character offset into the scanned source
        offset: usize,
    },
    /// Internal error (should not happen in normal operation)
    InternalError { message: String },
}

impl EmberError {
    /// Create a new unrecognized-character error
    pub fn unrecognized_character(character: char, offset: usize) -> Self {
        Self::UnrecognizedCharacter { character, offset }
    }

    /// Create a new internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::UnrecognizedCharacter { .. } => "Lexer Error",
            Self::InternalError { .. } => "Internal Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::UnrecognizedCharacter { character, .. } => {
                format!("unrecognized character '{}'", character)
            }
            Self::InternalError { message } => message.clone(),
        }
    }

    /// Get the source offset the error points at, if any
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedCharacter { offset, .. } => Some(*offset),
            Self::InternalError { .. } => None,
        }
    }
}

impl fmt::Display for EmberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset() {
            write!(f, "{}: {} at offset {}", self.kind(), self.message(), offset)
        } else {
            write!(f, "{}: {}", self.kind(), self.message())
        }
    }
}

impl std::error::Error for EmberError {}
