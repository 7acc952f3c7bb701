//! Perfection Language Front End Library
//!
//! This library provides the lexer and parser for the Perfection language,
//! plus the converter that regenerates the token-name string table from its
//! hand-written declaration block.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod tokenconv;

// Re-export commonly used types
pub use ast::{Expression, Program, Statement};
pub use error::{DiagnosticError, LexerError, ParserError, PerfError, PerfResult};
pub use lexer::{tokenize, Lexer, Position, Token, TokenWithPosition, TOKEN_NAMES};
pub use parser::{ParseError, ParseResult, Parser};
