use std::{fmt::Display, io};

use thiserror::Error;

use crate::token::Token;

/// Everything that can stop a scan. The first one encountered ends it.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErrorType {
    #[error("Unexpected character '{character}' on line {line}.")]
    UnexpectedCharacter {
        character: char,
        line: usize,
    },

    // `line` is where the opening quote was, not where the input ran out.
    #[error("Unterminated string starting on line {line}.")]
    UnterminatedString {
        line: usize,
    },

    #[error("Invalid number literal '{lexeme}' on line {line}.")]
    InvalidNumber {
        lexeme: String,
        line: usize,
    },
}

impl ErrorType {
    /// The 1-based line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::InvalidNumber { line, .. } => *line,
        }
    }
}

/// An evaluation-time failure tied to the token where it happened.
///
/// The scanner never builds one of these; it lives next to `ErrorType` so the
/// evaluator can point back into the source through the token's line.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}\n[line {}]", .token.line())]
pub struct RuntimeError {
    token: Token,
    message: String,
}

impl RuntimeError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        Self {
            token,
            message: message.into(),
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Writes a one-line diagnostic for `error` to `out`.
///
/// Callers normally pass `io::stderr()`.
pub fn report<W: io::Write>(out: &mut W, error: &ErrorType) -> io::Result<()> {
    report_at(out, error.line(), error)
}

/// Same as `report`, for failures raised after scanning.
pub fn report_runtime<W: io::Write>(out: &mut W, error: &RuntimeError) -> io::Result<()> {
    report_at(out, error.token().line(), error.message())
}

fn report_at<W: io::Write>(out: &mut W, line: usize, message: impl Display) -> io::Result<()> {
    writeln!(out, "[line {}] Error: {}", line, message)
}
