//! Codes for classifier diagnostics.
//!
//! All current codes are `W0xx` scanner warnings.

use std::fmt;

/// Codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unterminated block.
    ///
    /// End of input was reached while a brace block or a semicolon-terminated
    /// declaration was still open. The partial block is kept in its category.
    W001,

    /// Unbalanced closing brace.
    ///
    /// The running brace depth dropped below zero.
    W002,

    /// Additional top-level declaration.
    ///
    /// More than one `contract`, `interface` or `library` was declared in
    /// the same file. Members of all bodies are merged into one ordering.
    W003,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "W001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W001 => "W001",
            ErrorCode::W002 => "W002",
            ErrorCode::W003 => "W003",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::W001 => "unterminated block",
            ErrorCode::W002 => "unbalanced closing brace",
            ErrorCode::W003 => "additional top-level declaration",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
