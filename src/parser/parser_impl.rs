//! Main parser structure and utilities.

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::{Token, TokenWithPosition};

use super::ParseResult;

/// Perfection parser
pub struct Parser {
    pub(super) tokens: Vec<TokenWithPosition>,
    pub(super) current: usize,
}

impl Parser {
    /// Create a parser over a token stream, which must end with `Eof`
    pub fn new(tokens: Vec<TokenWithPosition>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse a complete program: statements until end of input
    pub fn parse(&mut self) -> ParseResult<Program> {
        let start = self.current_span().start;
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        let span = match statements.last() {
            Some(Statement::Expression(stmt)) => Span::new(start, stmt.span.end),
            None => Span::dummy(),
        };

        Ok(Program { statements, span })
    }

    /// Parse a single statement.
    ///
    /// `func` introduces a function definition, which is reserved but not
    /// implemented; everything else is an expression statement.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.check(&Token::KeywordFunc) {
            return Err(ParserError::NotImplemented {
                feature: "function definitions".to_string(),
                span: self.current_span(),
            });
        }

        let expression = self.parse_expression()?;
        let start = expression.span().start;

        let semicolon = self.current_span();
        if !self.match_token(&Token::Semicolon) {
            return Err(ParserError::Expected {
                expected: "semicolon after expression".to_string(),
                span: semicolon,
            });
        }

        Ok(Statement::Expression(ExpressionStmt {
            expression,
            span: Span::new(start, semicolon.end),
        }))
    }

    // ==================== Utility methods ====================

    /// Current token, if any
    pub(super) fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current).map(|t| &t.token)
    }

    /// Span of the current token, or a dummy span past the end
    pub(super) fn current_span(&self) -> Span {
        self.tokens
            .get(self.current)
            .map(|t| t.span)
            .unwrap_or_else(Span::dummy)
    }

    /// Whether the current token has the same kind as `expected`
    pub(super) fn check(&self, expected: &Token) -> bool {
        self.current_token()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    /// Consume the current token if it has the same kind as `expected`
    pub(super) fn match_token(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Move past the current token, returning it with its position
    pub(super) fn advance(&mut self) -> Option<&TokenWithPosition> {
        let token = self.tokens.get(self.current);
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    /// Whether the stream is exhausted
    pub(super) fn is_at_end(&self) -> bool {
        matches!(self.current_token(), Some(Token::Eof) | None)
    }
}
