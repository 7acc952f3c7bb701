//! Token types for the Perfection language.
//!
//! The enumeration mirrors the hand-written declaration block in
//! [`crate::tokenconv::TOKEN_DECLARATIONS`]; [`TOKEN_NAMES`] is the string
//! table generated from it, indexed by [`Token::index`].

use logos::{FilterResult, Lexer as LogosLexer, Logos};
use std::fmt;

/// Token kinds, with literal values where a kind carries one
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")] // Whitespace separates tokens
pub enum Token {
    // Punctuation
    #[token("(")]
    LeftParentheses,
    #[token(")")]
    RightParentheses,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("/")]
    Slash,
    #[token("*")]
    Asterisk,
    #[token("%")]
    Percent,
    #[token("&")]
    Ampersand,

    // Comparison and assignment
    #[token("!")]
    Exclaim,
    #[token("!=")]
    ExclaimEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    // Identifiers: alphabetic start, alphanumeric continuation.
    // Must come after keywords to avoid conflicts.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_owned(), priority = 1)]
    Identifier(String),

    // String literals: the value is the raw inner text; escapes only shield
    // the terminator and are kept verbatim.
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_owned()
    })]
    String(String),

    // Float literals: digits, one dot, fractional digits required
    #[regex(r"[0-9][0-9_]*\.[0-9_]*", parse_number)]
    Number(f64),

    // Integer literals: decimal, or 0b/0o/0x radix notation
    #[regex(r"[0-9][0-9_]*", parse_integer)]
    #[regex(r"0[a-zA-Z][0-9a-zA-Z_]*", parse_radix_integer)]
    Integer(u64),

    // Keywords
    #[token("func")]
    KeywordFunc,
    #[token("var")]
    KeywordVar,
    #[token("let")]
    KeywordLet,
    #[token("const")]
    KeywordConst,
    #[token("if")]
    KeywordIf,
    #[token("else")]
    KeywordElse,
    #[token("for")]
    KeywordFor,
    #[token("while")]
    KeywordWhile,
    #[token("true")]
    KeywordTrue,
    #[token("false")]
    KeywordFalse,
    #[token("return")]
    KeywordReturn,
    #[token("do")]
    KeywordDo,
    #[token("class")]
    KeywordClass,
    #[token("continue")]
    KeywordContinue,
    #[token("break")]
    KeywordBreak,

    // Comments are skipped; an unterminated block comment is a lexical error
    #[regex(r"//[^\n]*", logos::skip)]
    #[token("/*", skip_block_comment)]
    Skip,

    // Appended to every successfully lexed stream
    Eof,
}

/// The token-name string table, indexed by token kind.
///
/// Its rows are exactly the converter's output over the embedded declaration
/// block; `tests/tokenconv_test.rs` keeps the two in sync.
pub const TOKEN_NAMES: [&str; 43] = [
    "TOKEN_LEFT_PARENTHESES",
    "TOKEN_RIGHT_PARENTHESES",
    "TOKEN_LEFT_BRACE",
    "TOKEN_RIGHT_BRACE",
    "TOKEN_COMMA",
    "TOKEN_PERIOD",
    "TOKEN_SEMICOLON",
    "TOKEN_COLON",
    "TOKEN_MINUS",
    "TOKEN_PLUS",
    "TOKEN_SLASH",
    "TOKEN_ASTERISK",
    "TOKEN_PERCENT",
    "TOKEN_AMPERSAND",
    "TOKEN_EXCLAIM",
    "TOKEN_EXCLAIM_EQUAL",
    "TOKEN_EQUAL",
    "TOKEN_EQUAL_EQUAL",
    "TOKEN_GREATER",
    "TOKEN_GREATER_EQUAL",
    "TOKEN_LESS",
    "TOKEN_LESS_EQUAL",
    "TOKEN_IDENTIFIER",
    "TOKEN_STRING",
    "TOKEN_NUMBER",
    "TOKEN_INTEGER",
    "TOKEN_KEYWORD_FUNC",
    "TOKEN_KEYWORD_VAR",
    "TOKEN_KEYWORD_LET",
    "TOKEN_KEYWORD_CONST",
    "TOKEN_KEYWORD_IF",
    "TOKEN_KEYWORD_ELSE",
    "TOKEN_KEYWORD_FOR",
    "TOKEN_KEYWORD_WHILE",
    "TOKEN_KEYWORD_TRUE",
    "TOKEN_KEYWORD_FALSE",
    "TOKEN_KEYWORD_RETURN",
    "TOKEN_KEYWORD_DO",
    "TOKEN_KEYWORD_CLASS",
    "TOKEN_KEYWORD_CONTINUE",
    "TOKEN_KEYWORD_BREAK",
    "TOKEN_SKIP",
    "TOKEN_EOF",
];

impl Token {
    /// Index of this kind in the declaration order
    pub fn index(&self) -> usize {
        match self {
            Token::LeftParentheses => 0,
            Token::RightParentheses => 1,
            Token::LeftBrace => 2,
            Token::RightBrace => 3,
            Token::Comma => 4,
            Token::Period => 5,
            Token::Semicolon => 6,
            Token::Colon => 7,
            Token::Minus => 8,
            Token::Plus => 9,
            Token::Slash => 10,
            Token::Asterisk => 11,
            Token::Percent => 12,
            Token::Ampersand => 13,
            Token::Exclaim => 14,
            Token::ExclaimEqual => 15,
            Token::Equal => 16,
            Token::EqualEqual => 17,
            Token::Greater => 18,
            Token::GreaterEqual => 19,
            Token::Less => 20,
            Token::LessEqual => 21,
            Token::Identifier(_) => 22,
            Token::String(_) => 23,
            Token::Number(_) => 24,
            Token::Integer(_) => 25,
            Token::KeywordFunc => 26,
            Token::KeywordVar => 27,
            Token::KeywordLet => 28,
            Token::KeywordConst => 29,
            Token::KeywordIf => 30,
            Token::KeywordElse => 31,
            Token::KeywordFor => 32,
            Token::KeywordWhile => 33,
            Token::KeywordTrue => 34,
            Token::KeywordFalse => 35,
            Token::KeywordReturn => 36,
            Token::KeywordDo => 37,
            Token::KeywordClass => 38,
            Token::KeywordContinue => 39,
            Token::KeywordBreak => 40,
            Token::Skip => 41,
            Token::Eof => 42,
        }
    }

    /// The `TOKEN_*` name of this kind
    pub fn name(&self) -> &'static str {
        TOKEN_NAMES[self.index()]
    }
}

/// Parse a decimal integer literal; underscores are digit separators
fn parse_integer(lex: &mut LogosLexer<Token>) -> Option<u64> {
    let digits: String = lex.slice().chars().filter(|c| *c != '_').collect();
    digits.parse::<u64>().ok()
}

/// Parse a radix-prefixed integer literal (`0b`, `0o`, `0x`).
///
/// The regex also catches a leading zero followed by any other alphabetic
/// character; those fail here and surface as invalid-number errors.
fn parse_radix_integer(lex: &mut LogosLexer<Token>) -> Option<u64> {
    let s = lex.slice();
    let radix = match s.as_bytes()[1] {
        b'b' => 2,
        b'o' => 8,
        b'x' => 16,
        _ => return None,
    };
    let digits: String = s[2..].chars().filter(|c| *c != '_').collect();
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(&digits, radix).ok()
}

/// Parse a float literal; a dot with no fractional digits is rejected
fn parse_number(lex: &mut LogosLexer<Token>) -> Option<f64> {
    let cleaned: String = lex.slice().chars().filter(|c| *c != '_').collect();
    if cleaned.ends_with('.') {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Skip a block comment, erroring if it never terminates
fn skip_block_comment(lex: &mut LogosLexer<Token>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(())
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::String(s) => write!(f, "string \"{}\"", s),
            Token::Number(value) => write!(f, "number {}", value),
            Token::Integer(value) => write!(f, "integer {}", value),
            _ => write!(f, "{}", self.name()),
        }
    }
}
