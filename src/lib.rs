//! # Ember Programming Language
//!
//! The front end for Ember, a minimal imperative language with:
//! - `let` declarations and assignment
//! - integer literals, identifiers, parentheses, curly braces, semicolons
//! - an `exit` statement
//!
//! ## Architecture
//!
//! The implementation is organized into two modules:
//! - `lexer`: Tokenization of source code
//! - `error`: Error handling and diagnostics
//!
//! Lexical analysis is the only implemented stage. The token stream it
//! produces is the input contract for a future parser; parsing, semantic
//! analysis, and code generation are out of scope here.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, EmberError, EmberResult};
pub use lexer::{Token, TokenKind, Tokenizer};

/// Version of the Ember language
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize an Ember program from source code
///
/// This is the main entry point for embedding the lexer. The source is
/// copied into the tokenizer, and the returned tokens own their payloads,
/// so both stay valid independently of the caller's buffer.
///
/// # Arguments
///
/// * `source` - The source code to tokenize
///
/// # Returns
///
/// Returns the tokens in source order, or an `EmberError` identifying the
/// first unrecognized character and its offset.
pub fn tokenize(source: &str) -> EmberResult<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(source);
    tokenizer.tokenize()
}
