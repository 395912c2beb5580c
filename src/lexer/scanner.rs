//! Tokenizer implementation for the Ember language
//!
//! This module implements lexical analysis, converting source text into a
//! flat sequence of tokens for a future parser to consume.

use crate::error::{EmberError, EmberResult};
use super::token::{Token, TokenKind};

/// Tokenizer for Ember source text
///
/// Owns an immutable copy of the source and a scan cursor. Classification
/// is ASCII-only; any character outside the recognized classes stops the
/// scan with an [`EmberError::UnrecognizedCharacter`].
pub struct Tokenizer {
    source: Vec<char>,
    cursor: usize,
}

impl Tokenizer {
    /// Create a tokenizer over an owned copy of `source`
    ///
    /// The text is copied, so the caller's buffer may be dropped or
    /// mutated afterward without affecting the scan.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            cursor: 0,
        }
    }

    /// Tokenize the source text
    ///
    /// Performs a single forward scan and returns the tokens in source
    /// order. The cursor is reset before scanning, so calling this again
    /// on the same tokenizer reproduces the same sequence; on success the
    /// cursor is left at end-of-input.
    pub fn tokenize(&mut self) -> EmberResult<Vec<Token>> {
        self.cursor = 0;
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            match c {
                // Whitespace (skip)
                c if c.is_ascii_whitespace() => {
                    self.consume();
                }

                // Single-character tokens
                '(' => tokens.push(self.punctuation(TokenKind::ParenOpen)),
                ')' => tokens.push(self.punctuation(TokenKind::ParenClose)),
                '{' => tokens.push(self.punctuation(TokenKind::CurlyOpen)),
                '}' => tokens.push(self.punctuation(TokenKind::CurlyClose)),
                ';' => tokens.push(self.punctuation(TokenKind::Semicolon)),
                '=' => tokens.push(self.punctuation(TokenKind::Equal)),

                // Integer literals
                c if c.is_ascii_digit() => tokens.push(self.scan_integer()),

                // Identifiers and keywords
                c if c.is_ascii_alphabetic() => tokens.push(self.scan_word()),

                // Unrecognized character
                _ => return Err(EmberError::unrecognized_character(c, self.cursor)),
            }
        }

        Ok(tokens)
    }

    /// Consume one punctuation character and emit its token
    fn punctuation(&mut self, kind: TokenKind) -> Token {
        self.consume();
        Token::new(kind)
    }

    /// Scan an identifier or keyword
    ///
    /// Accumulates the longest run of alphanumerics, then classifies the
    /// completed lexeme; keywords are only recognized by exact match, so
    /// `exit1` stays a single identifier.
    fn scan_word(&mut self) -> Token {
        let mut lexeme = String::new();
        lexeme.push(self.consume());

        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            lexeme.push(self.consume());
        }

        match TokenKind::keyword(&lexeme) {
            Some(kind) => Token::new(kind),
            None => Token::with_value(TokenKind::Identifier, lexeme),
        }
    }

    /// Scan an integer literal
    ///
    /// Digits only: no sign, decimal point, or exponent. The payload is
    /// the digit text verbatim, leading zeros included; a letter right
    /// after the run starts a new lexeme instead of extending this one.
    fn scan_integer(&mut self) -> Token {
        let mut lexeme = String::new();
        lexeme.push(self.consume());

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            lexeme.push(self.consume());
        }

        Token::with_value(TokenKind::IntegerLiteral, lexeme)
    }

    /// Peek at the current character without consuming it
    ///
    /// Returns `None` at end-of-input.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek `offset` characters past the cursor without consuming anything
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.cursor + offset).copied()
    }

    /// Return the character at the cursor and advance past it
    ///
    /// Callers must have verified with `peek` that the character exists;
    /// consuming past end-of-input is a bug in the scanner itself.
    fn consume(&mut self) -> char {
        assert!(
            self.cursor < self.source.len(),
            "consume past end of source (cursor {})",
            self.cursor
        );
        let c = self.source[self.cursor];
        self.cursor += 1;
        c
    }
}
