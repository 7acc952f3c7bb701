//! Unified error handling for the Perfection front end.
//!
//! Every stage of the pipeline reports failures through the types in this
//! module, and the CLI renders them as `codespan-reporting` diagnostics.

use crate::ast::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// Result alias used throughout the library
pub type PerfResult<T> = Result<T, PerfError>;

/// Top-level error type for the Perfection front end
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerfError {
    #[error("lexical error: {0}")]
    Lexer(#[from] LexerError),

    #[error("parse error: {0}")]
    Parser(#[from] ParserError),

    #[error("file error: {0}")]
    Io(String),
}

/// Errors produced while tokenizing source text.
///
/// Lexing is fail-fast: the first error aborts the token stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("unrecognized token: '{token}'")]
    UnrecognizedToken { token: String, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("unterminated block comment")]
    UnterminatedComment { span: Span },

    #[error("invalid numeric literal: '{literal}'")]
    InvalidNumber { literal: String, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnrecognizedToken { span, .. }
            | LexerError::UnterminatedString { span }
            | LexerError::UnterminatedComment { span }
            | LexerError::InvalidNumber { span, .. } => *span,
        }
    }
}

/// Errors produced by the recursive descent parser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("unexpected token: {found}")]
    UnexpectedToken { found: String, span: Span },

    #[error("expected identifier, number, integer or string literal")]
    UnexpectedEof { span: Span },

    #[error("expected {expected}")]
    Expected { expected: String, span: Span },

    #[error("not yet implemented: {feature}")]
    NotImplemented { feature: String, span: Span },
}

impl ParserError {
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. }
            | ParserError::UnexpectedEof { span }
            | ParserError::Expected { span, .. }
            | ParserError::NotImplemented { span, .. } => *span,
        }
    }
}

/// An error paired with the file it was found in, for diagnostic rendering
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: PerfError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: PerfError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// Convert into a `codespan-reporting` diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            PerfError::Lexer(e) => {
                let label = match e {
                    LexerError::UnrecognizedToken { span, .. } => {
                        Label::primary(self.file_id, span.start..span.end)
                            .with_message("this token is not valid")
                    }
                    LexerError::UnterminatedString { span } => {
                        Label::primary(self.file_id, span.start..span.end)
                            .with_message("string is never closed")
                    }
                    LexerError::UnterminatedComment { span } => {
                        Label::primary(self.file_id, span.start..span.end)
                            .with_message("comment is never closed")
                    }
                    LexerError::InvalidNumber { span, .. } => {
                        Label::primary(self.file_id, span.start..span.end)
                    }
                };
                (format!("{}", e), vec![label])
            }
            PerfError::Parser(e) => {
                let span = e.span();
                (
                    format!("{}", e),
                    vec![Label::primary(self.file_id, span.start..span.end)],
                )
            }
            PerfError::Io(message) => (format!("file error: {}", message), vec![]),
        };

        Diagnostic::error().with_message(message).with_labels(labels)
    }
}
