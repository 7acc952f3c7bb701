//! Lexer tests.
//!
//! Covers every token class, position tracking, comment handling, and each
//! lexical error.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use perflang::error::LexerError;
    use perflang::lexer::{tokenize, Position, Token};

    /// Tokenize and keep only the token kinds, dropping the trailing Eof
    fn extract_tokens(source: &str) -> Vec<Token> {
        let tokens = tokenize(source).expect("lexing should succeed");
        tokens
            .into_iter()
            .map(|t| t.token)
            .filter(|t| !matches!(t, Token::Eof))
            .collect()
    }

    fn lex_error(source: &str) -> LexerError {
        tokenize(source).expect_err("lexing should fail")
    }

    #[test]
    fn test_keywords() {
        let source = "func var let const if else for while true false return do class continue break";
        let expected = vec![
            Token::KeywordFunc,
            Token::KeywordVar,
            Token::KeywordLet,
            Token::KeywordConst,
            Token::KeywordIf,
            Token::KeywordElse,
            Token::KeywordFor,
            Token::KeywordWhile,
            Token::KeywordTrue,
            Token::KeywordFalse,
            Token::KeywordReturn,
            Token::KeywordDo,
            Token::KeywordClass,
            Token::KeywordContinue,
            Token::KeywordBreak,
        ];
        assert_eq!(extract_tokens(source), expected);
    }

    #[test]
    fn test_punctuation() {
        let source = "( ) { } , . ; : - + / * % &";
        let expected = vec![
            Token::LeftParentheses,
            Token::RightParentheses,
            Token::LeftBrace,
            Token::RightBrace,
            Token::Comma,
            Token::Period,
            Token::Semicolon,
            Token::Colon,
            Token::Minus,
            Token::Plus,
            Token::Slash,
            Token::Asterisk,
            Token::Percent,
            Token::Ampersand,
        ];
        assert_eq!(extract_tokens(source), expected);
    }

    #[test]
    fn test_comparison_operators() {
        let source = "! != = == > >= < <=";
        let expected = vec![
            Token::Exclaim,
            Token::ExclaimEqual,
            Token::Equal,
            Token::EqualEqual,
            Token::Greater,
            Token::GreaterEqual,
            Token::Less,
            Token::LessEqual,
        ];
        assert_eq!(extract_tokens(source), expected);
    }

    #[test]
    fn test_two_char_operators_without_spaces() {
        // Two-character operators take precedence over their prefixes.
        let source = "a<=b!=c";
        let expected = vec![
            Token::Identifier("a".to_string()),
            Token::LessEqual,
            Token::Identifier("b".to_string()),
            Token::ExclaimEqual,
            Token::Identifier("c".to_string()),
        ];
        assert_eq!(extract_tokens(source), expected);
    }

    #[test]
    fn test_identifiers() {
        let source = "foo Bar9 iffy";
        let expected = vec![
            Token::Identifier("foo".to_string()),
            Token::Identifier("Bar9".to_string()),
            // A keyword prefix does not make an identifier a keyword
            Token::Identifier("iffy".to_string()),
        ];
        assert_eq!(extract_tokens(source), expected);
    }

    #[test]
    fn test_underscore_is_not_an_identifier_char() {
        // Identifiers are alphabetic-start, alphanumeric-continue only;
        // an underscore outside a number is not a token at all.
        let err = lex_error("foo_bar");
        assert!(matches!(err, LexerError::UnrecognizedToken { ref token, .. } if token == "_"));
    }

    #[test_case("42", 42 ; "decimal")]
    #[test_case("0", 0 ; "zero")]
    #[test_case("1_000_000", 1_000_000 ; "separators")]
    #[test_case("0b1010", 10 ; "binary")]
    #[test_case("0o17", 15 ; "octal")]
    #[test_case("0xFF", 255 ; "hex")]
    #[test_case("0x1_F", 31 ; "hex with separator")]
    fn test_integer_literals(source: &str, value: u64) {
        assert_eq!(extract_tokens(source), vec![Token::Integer(value)]);
    }

    #[test_case("3.14", 3.14 ; "simple")]
    #[test_case("0.5", 0.5 ; "leading zero")]
    #[test_case("1_0.2_5", 10.25 ; "separators")]
    fn test_float_literals(source: &str, value: f64) {
        assert_eq!(extract_tokens(source), vec![Token::Number(value)]);
    }

    #[test_case("0b" ; "missing binary digits")]
    #[test_case("0b2" ; "bad binary digit")]
    #[test_case("0o9" ; "bad octal digit")]
    #[test_case("0y12" ; "unknown radix letter")]
    #[test_case("3." ; "dot without fraction")]
    fn test_invalid_numbers(source: &str) {
        assert!(matches!(lex_error(source), LexerError::InvalidNumber { .. }));
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(
            extract_tokens(r#""hello world""#),
            vec![Token::String("hello world".to_string())]
        );
    }

    #[test]
    fn test_string_escapes_kept_verbatim() {
        // A backslash only shields the terminator; the bytes are copied raw.
        assert_eq!(
            extract_tokens(r#""say \"hi\"""#),
            vec![Token::String(r#"say \"hi\""#.to_string())]
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(
            lex_error("\"oops"),
            LexerError::UnterminatedString { .. }
        ));
    }

    #[test]
    fn test_comments_are_skipped() {
        let source = "1 // line comment\n/* block\ncomment */ 2";
        assert_eq!(
            extract_tokens(source),
            vec![Token::Integer(1), Token::Integer(2)]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert!(matches!(
            lex_error("1 /* still open"),
            LexerError::UnterminatedComment { .. }
        ));
    }

    #[test]
    fn test_unrecognized_token() {
        assert!(matches!(
            lex_error("@"),
            LexerError::UnrecognizedToken { ref token, .. } if token == "@"
        ));
    }

    #[test]
    fn test_eof_is_appended() {
        let tokens = tokenize("").expect("empty input lexes");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token, Token::Eof);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("let x\n  = 1").expect("lexing should succeed");

        assert_eq!(tokens[0].position, Position { line: 1, column: 1 });
        assert_eq!(tokens[1].position, Position { line: 1, column: 5 });
        assert_eq!(tokens[2].position, Position { line: 2, column: 3 });
        assert_eq!(tokens[3].position, Position { line: 2, column: 5 });
    }

    #[test]
    fn test_token_names() {
        assert_eq!(Token::Comma.name(), "TOKEN_COMMA");
        assert_eq!(Token::Identifier("x".to_string()).name(), "TOKEN_IDENTIFIER");
        assert_eq!(Token::Eof.name(), "TOKEN_EOF");
    }
}
