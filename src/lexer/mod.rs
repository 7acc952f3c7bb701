//! Lexical analysis module for the Perfection language.
//!
//! This module is responsible for tokenizing Perfection source code into a
//! stream of tokens: keywords, identifiers, literals, operators and
//! punctuation, with line/column positions tracked across whitespace and
//! comments. Lexing is fail-fast; the first error aborts the stream.

mod lexer;
mod token;

pub use lexer::{tokenize, Lexer, Position, TokenWithPosition};
pub use token::{Token, TOKEN_NAMES};
