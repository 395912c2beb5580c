//! Diagnostic formatting for better error messages
//!
//! This module provides utilities for formatting error messages with
//! source code context.

use super::EmberError;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
///
/// The lexer itself reports only a character offset; line and column are
/// derived from the attached source at render time.
pub struct Diagnostic {
    error: EmberError,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: EmberError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: EmberError, source: &str) -> Self {
        Self {
            error,
            source: Some(source.to_string()),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Error header
        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.error.message());
        output.push('\n');

        // Location and source context
        if let Some(offset) = self.error.offset() {
            match self.source {
                Some(ref source) => {
                    let (line, column) = line_and_column(source, offset);
                    output.push_str(&format!(
                        "  {} {}:{}\n",
                        "-->".blue().bold(),
                        line,
                        column
                    ));
                    output.push_str(&self.format_source_context(source, line, column));
                }
                None => {
                    output.push_str(&format!("  {} offset {}\n", "-->".blue().bold(), offset));
                }
            }
        }

        output
    }

    /// Format source code context around the error location
    fn format_source_context(&self, source: &str, line: usize, column: usize) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if line == 0 || line > lines.len() {
            return output;
        }

        let line_idx = line - 1;
        let line_num_width = line.to_string().len();

        // Show previous line if available
        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        // Show error line
        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        // Show error indicator
        let indicator_padding = " ".repeat(line_num_width + 3 + column - 1);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        // Show next line if available
        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Translate a character offset into 1-based line and column numbers
fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (i, c) in source.chars().enumerate() {
        if i == offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_without_source() {
        let err = EmberError::unrecognized_character('@', 8);
        let diag = Diagnostic::new(err);

        let formatted = diag.format();
        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("unrecognized character '@'"));
        assert!(formatted.contains("offset 8"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        let source = "let x = 42;\nlet y = @;\nlet z = 10;";
        let err = EmberError::unrecognized_character('@', 20);
        let diag = Diagnostic::with_source(err, source);

        let formatted = diag.format();
        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("let y = @;"));
        assert!(formatted.contains("2:9"));
    }

    #[test]
    fn test_line_and_column_from_offset() {
        let source = "ab\ncd";
        assert_eq!(line_and_column(source, 0), (1, 1));
        assert_eq!(line_and_column(source, 1), (1, 2));
        assert_eq!(line_and_column(source, 3), (2, 1));
        assert_eq!(line_and_column(source, 4), (2, 2));
    }
}
