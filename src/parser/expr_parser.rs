//! Expression parsing.
//!
//! One method per precedence level, each looping over its operators and
//! folding left.

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::Token;

use super::{ParseResult, Parser};

impl Parser {
    /// Parse an expression (the loosest level is equality)
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_equality_expression()
    }

    /// Parse an equality expression
    pub(super) fn parse_equality_expression(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_comparison_expression()?;

        loop {
            let op = match self.current_token() {
                Some(Token::EqualEqual) => BinaryOp::Equal,
                Some(Token::ExclaimEqual) => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_comparison_expression()?;
            let span = Span::new(left.span().start, right.span().end);
            left = Expression::Binary(BinaryExpr {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span,
            });
        }

        Ok(left)
    }

    /// Parse a comparison expression
    pub(super) fn parse_comparison_expression(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_addition_expression()?;

        loop {
            let op = match self.current_token() {
                Some(Token::Greater) => BinaryOp::Greater,
                Some(Token::GreaterEqual) => BinaryOp::GreaterEqual,
                Some(Token::Less) => BinaryOp::Less,
                Some(Token::LessEqual) => BinaryOp::LessEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_addition_expression()?;
            let span = Span::new(left.span().start, right.span().end);
            left = Expression::Binary(BinaryExpr {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span,
            });
        }

        Ok(left)
    }

    /// Parse an addition expression
    pub(super) fn parse_addition_expression(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplication_expression()?;

        loop {
            let op = match self.current_token() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplication_expression()?;
            let span = Span::new(left.span().start, right.span().end);
            left = Expression::Binary(BinaryExpr {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span,
            });
        }

        Ok(left)
    }

    /// Parse a multiplication expression
    pub(super) fn parse_multiplication_expression(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary_expression()?;

        loop {
            let op = match self.current_token() {
                Some(Token::Asterisk) => BinaryOp::Multiply,
                Some(Token::Slash) => BinaryOp::Divide,
                Some(Token::Percent) => BinaryOp::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary_expression()?;
            let span = Span::new(left.span().start, right.span().end);
            left = Expression::Binary(BinaryExpr {
                left: Box::new(left),
                op,
                right: Box::new(right),
                span,
            });
        }

        Ok(left)
    }

    /// Parse a unary expression; prefix operators nest
    pub(super) fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let op = match self.current_token() {
            Some(Token::Exclaim) => Some(UnaryOp::Not),
            Some(Token::Minus) => Some(UnaryOp::Negate),
            _ => None,
        };

        if let Some(op) = op {
            let start = self.current_span().start;
            self.advance();
            let operand = self.parse_unary_expression()?;
            let span = Span::new(start, operand.span().end);
            return Ok(Expression::Unary(UnaryExpr {
                op,
                operand: Box::new(operand),
                span,
            }));
        }

        self.parse_primary_expression()
    }

    /// Parse a primary expression: a constant, a variable, or a group
    pub(super) fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let span = self.current_span();
        let token = match self.current_token() {
            Some(token) => token.clone(),
            None => return Err(ParserError::UnexpectedEof { span }),
        };

        match token {
            Token::Identifier(name) => {
                self.advance();
                Ok(Expression::Variable(VariableExpr { name, span }))
            }
            Token::Integer(value) => {
                self.advance();
                Ok(Expression::Constant(ConstantExpr {
                    value: ConstantValue::Integer(value),
                    span,
                }))
            }
            Token::Number(value) => {
                self.advance();
                Ok(Expression::Constant(ConstantExpr {
                    value: ConstantValue::Number(value),
                    span,
                }))
            }
            Token::String(value) => {
                self.advance();
                Ok(Expression::Constant(ConstantExpr {
                    value: ConstantValue::String(value),
                    span,
                }))
            }
            Token::KeywordTrue => {
                self.advance();
                Ok(Expression::Constant(ConstantExpr {
                    value: ConstantValue::Boolean(true),
                    span,
                }))
            }
            Token::KeywordFalse => {
                self.advance();
                Ok(Expression::Constant(ConstantExpr {
                    value: ConstantValue::Boolean(false),
                    span,
                }))
            }
            Token::LeftParentheses => {
                self.advance();

                if self.check(&Token::Eof) {
                    return Err(ParserError::UnexpectedEof {
                        span: self.current_span(),
                    });
                }

                let inner = self.parse_expression()?;

                let close = self.current_span();
                if !self.match_token(&Token::RightParentheses) {
                    return Err(ParserError::Expected {
                        expected: "closing parenthesis".to_string(),
                        span: close,
                    });
                }

                Ok(Expression::Group(GroupExpr {
                    expression: Box::new(inner),
                    span: Span::new(span.start, close.end),
                }))
            }
            token => Err(ParserError::UnexpectedToken {
                found: token.to_string(),
                span,
            }),
        }
    }
}
