//! The lexer wrapper: position tracking and error classification.

use logos::Logos;

use super::token::Token;
use crate::ast::Span;
use crate::error::LexerError;

/// Line/column position within the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new() -> Self {
        Position { line: 1, column: 1 }
    }

    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// A token with its position information
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPosition {
    pub token: Token,
    pub position: Position,
    pub span: Span,
}

/// Lexer for the Perfection language.
///
/// Wraps the generated `logos` lexer, tracks line/column positions across
/// skipped whitespace and comments, and classifies raw error slices into
/// typed [`LexerError`]s.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
    position: Position,
    input: &'a str,
    last_end: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            position: Position::new(),
            input,
            last_end: 0,
        }
    }

    /// Current position, past everything consumed so far
    pub fn position(&self) -> Position {
        self.position
    }

    /// Turn an error slice into the lexical error it represents.
    ///
    /// `logos` reports failures as unmatched spans; the leading characters
    /// of the slice tell us which construct went wrong.
    fn classify_error(&self, span: Span) -> LexerError {
        let slice = &self.input[span.start..span.end];
        if slice.starts_with('"') {
            LexerError::UnterminatedString { span }
        } else if slice.starts_with("/*") {
            LexerError::UnterminatedComment { span }
        } else if slice.starts_with(|c: char| c.is_ascii_digit()) {
            LexerError::InvalidNumber {
                literal: slice.to_owned(),
                span,
            }
        } else {
            LexerError::UnrecognizedToken {
                token: slice.to_owned(),
                span,
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<TokenWithPosition, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();

        // Update position for any skipped content since the last token
        if span.start > self.last_end {
            for ch in self.input[self.last_end..span.start].chars() {
                self.position.advance(ch);
            }
        }

        // The position at the start of this token
        let position = self.position;

        // Update position over the consumed text
        for ch in self.input[span.start..span.end].chars() {
            self.position.advance(ch);
        }
        self.last_end = span.end;

        let span = Span::from(span);
        Some(match result {
            Ok(token) => Ok(TokenWithPosition {
                token,
                position,
                span,
            }),
            Err(()) => Err(self.classify_error(span)),
        })
    }
}

/// Tokenize source text into a complete token stream.
///
/// Fail-fast: the first lexical error aborts. On success the stream always
/// ends with an `Eof` token.
pub fn tokenize(input: &str) -> Result<Vec<TokenWithPosition>, LexerError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    for result in &mut lexer {
        tokens.push(result?);
    }
    tokens.push(TokenWithPosition {
        token: Token::Eof,
        position: lexer.position(),
        span: Span::new(input.len(), input.len()),
    });
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokens = tokenize("let x = 42;").unwrap();

        assert_eq!(tokens.len(), 6);
        assert!(matches!(tokens[0].token, Token::KeywordLet));
        assert!(matches!(tokens[1].token, Token::Identifier(_)));
        assert!(matches!(tokens[2].token, Token::Equal));
        assert!(matches!(tokens[3].token, Token::Integer(42)));
        assert!(matches!(tokens[4].token, Token::Semicolon));
        assert!(matches!(tokens[5].token, Token::Eof));
    }

    #[test]
    fn test_position_tracking() {
        let tokens = tokenize("a\n  b").unwrap();

        assert_eq!(tokens[0].position, Position { line: 1, column: 1 });
        assert_eq!(tokens[1].position, Position { line: 2, column: 3 });
    }

    #[test]
    fn test_string_literal_is_raw() {
        let tokens = tokenize(r#""a\nb""#).unwrap();

        if let Token::String(s) = &tokens[0].token {
            // Escapes are not processed; the inner bytes are kept verbatim.
            assert_eq!(s, r"a\nb");
        } else {
            panic!("expected string token");
        }
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("\"abc").unwrap_err();
        assert!(matches!(err, LexerError::UnterminatedString { .. }));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = tokenize("1 /* never closed").unwrap_err();
        assert!(matches!(err, LexerError::UnterminatedComment { .. }));
    }
}
