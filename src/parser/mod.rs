//! Parsing module.
//!
//! Recursive descent over the token stream, producing the AST with proper
//! operator precedence. Parsing is fail-fast: the first error aborts.
//!
//! The expression grammar, from loosest to tightest binding:
//!
//! ```text
//! expression     := equality
//! equality       := comparison (("==" | "!=") comparison)*
//! comparison     := addition ((">" | ">=" | "<" | "<=") addition)*
//! addition       := multiplication (("+" | "-") multiplication)*
//! multiplication := unary (("*" | "/" | "%") unary)*
//! unary          := ("!" | "-") unary | primary
//! primary        := identifier | integer | number | string
//!                 | "true" | "false" | "(" expression ")"
//! ```
//!
//! Binary operators associate left. The only statement form is an
//! expression terminated by a semicolon; `func` is reserved for function
//! definitions, which are not implemented yet.

mod expr_parser;
mod parser_impl;

pub use parser_impl::Parser;

use crate::error::ParserError;
pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;
