//! Token-name table converter.
//!
//! The token-kind names live twice: once as enum declarations and once as a
//! string table used to print tokens (see [`crate::lexer::TOKEN_NAMES`]).
//! This module turns the hand-written declaration block into the quoted rows
//! of that table, so the two can be regenerated from a single source.
//!
//! Each input line is trimmed, truncated at its first comma, and kept only if
//! the remaining text starts with `TOKEN`. Anything else (blank lines, inline
//! comments, structural comments) is filtered out. The transformation is
//! total: it cannot fail for any input, only produce an empty sequence.

/// The declaration block the token-kind enumeration is maintained from.
///
/// One declaration per line, with an inline comment naming the lexeme or
/// category each kind represents.
pub const TOKEN_DECLARATIONS: &str = r"
    TOKEN_LEFT_PARENTHESES,     // (
    TOKEN_RIGHT_PARENTHESES,    // )
    TOKEN_LEFT_BRACE,           // {
    TOKEN_RIGHT_BRACE,          // }
    TOKEN_COMMA,                // ,
    TOKEN_PERIOD,               // .
    TOKEN_SEMICOLON,            // ;
    TOKEN_COLON,                // :
    TOKEN_MINUS,                // -
    TOKEN_PLUS,                 // +
    TOKEN_SLASH,                // /
    TOKEN_ASTERISK,             // *
    TOKEN_PERCENT,              // %
    TOKEN_AMPERSAND,            // &

    TOKEN_EXCLAIM,              // !
    TOKEN_EXCLAIM_EQUAL,        // !=
    TOKEN_EQUAL,                // =
    TOKEN_EQUAL_EQUAL,          // ==
    TOKEN_GREATER,              // >
    TOKEN_GREATER_EQUAL,        // >=
    TOKEN_LESS,                 // <
    TOKEN_LESS_EQUAL,           // <=

    TOKEN_IDENTIFIER,           // Identifier
    TOKEN_STRING,               // String
    TOKEN_NUMBER,               // Number
    TOKEN_INTEGER,              // Integer

    TOKEN_KEYWORD_FUNC,         // func
    TOKEN_KEYWORD_VAR,          // var
    TOKEN_KEYWORD_LET,          // let
    TOKEN_KEYWORD_CONST,        // const
    TOKEN_KEYWORD_IF,           // if
    TOKEN_KEYWORD_ELSE,         // else
    TOKEN_KEYWORD_FOR,          // for
    TOKEN_KEYWORD_WHILE,        // while
    TOKEN_KEYWORD_TRUE,         // true
    TOKEN_KEYWORD_FALSE,        // false
    TOKEN_KEYWORD_RETURN,       // return
    TOKEN_KEYWORD_DO,           // do
    TOKEN_KEYWORD_CLASS,        // class
    TOKEN_KEYWORD_CONTINUE,     // continue
    TOKEN_KEYWORD_BREAK,        // break

    // Useless tokens / EOF
    TOKEN_SKIP,                 // Skip
    TOKEN_EOF,                  // End of file
";

/// Extract the candidate token names from a declaration block, in input order.
///
/// A candidate is the text of a line before its first comma, with surrounding
/// whitespace trimmed; only candidates starting with `TOKEN` qualify.
pub fn extract_token_names(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            trimmed.split(',').next().unwrap_or(trimmed)
        })
        .filter(|name| name.starts_with("TOKEN"))
}

/// Convert a declaration block into quoted string-table rows.
///
/// Each qualifying name becomes one `"<NAME>",` row; line order is preserved.
pub fn convert(input: &str) -> Vec<String> {
    extract_token_names(input)
        .map(|name| format!("\"{}\",", name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_block_count() {
        // The declaration block lists every kind exactly once.
        assert_eq!(convert(TOKEN_DECLARATIONS).len(), 43);
    }

    #[test]
    fn test_first_comma_wins() {
        let rows = convert("TOKEN_COMMA,                // ,");
        assert_eq!(rows, vec!["\"TOKEN_COMMA\",".to_string()]);
    }

    #[test]
    fn test_no_comma_line() {
        // A bare name with no trailing comma still qualifies.
        let rows = convert("TOKEN_EOF");
        assert_eq!(rows, vec!["\"TOKEN_EOF\",".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(convert("").is_empty());
    }
}
