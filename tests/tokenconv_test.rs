//! Token-name converter tests.
//!
//! Covers the filter-and-format contract line by line, plus the sync
//! guarantee between the embedded declaration block and the string table
//! the lexer prints token names from.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use perflang::lexer::TOKEN_NAMES;
    use perflang::tokenconv::{convert, extract_token_names, TOKEN_DECLARATIONS};

    #[test]
    fn test_end_to_end() {
        let block = "TOKEN_COMMA,                // ,\n\
                     TOKEN_PERIOD,               // .";
        let expected = vec!["\"TOKEN_COMMA\",".to_string(), "\"TOKEN_PERIOD\",".to_string()];
        assert_eq!(convert(block), expected);
    }

    #[test_case("    TOKEN_PLUS,                 // +", Some("\"TOKEN_PLUS\",") ; "comment stripped")]
    #[test_case("TOKEN_EOF", Some("\"TOKEN_EOF\",") ; "no comma")]
    #[test_case("TOKEN_X,y,z", Some("\"TOKEN_X\",") ; "first comma wins")]
    #[test_case("// Useless tokens / EOF", None ; "structural comment rejected")]
    #[test_case("", None ; "empty line rejected")]
    #[test_case("    ", None ; "whitespace only rejected")]
    #[test_case("NOT_A_TOKEN,", None ; "wrong prefix rejected")]
    fn test_single_line(line: &str, expected: Option<&str>) {
        let rows = convert(line);
        match expected {
            Some(row) => assert_eq!(rows, vec![row.to_string()]),
            None => assert!(rows.is_empty()),
        }
    }

    #[test]
    fn test_order_preserved() {
        let block = "TOKEN_B,\nTOKEN_A,\n// noise\nTOKEN_C,";
        let names: Vec<&str> = extract_token_names(block).collect();
        assert_eq!(names, vec!["TOKEN_B", "TOKEN_A", "TOKEN_C"]);
    }

    #[test]
    fn test_no_identifier_validation() {
        // A candidate starting with TOKEN is emitted as-is, well-formed or not.
        let rows = convert("TOKEN_FOO BAR,   // odd");
        assert_eq!(rows, vec!["\"TOKEN_FOO BAR\",".to_string()]);
    }

    #[test]
    fn test_second_pass_is_empty() {
        // Output rows start with a quote, so re-running the converter on its
        // own output never matches the prefix test.
        let first = convert(TOKEN_DECLARATIONS).join("\n");
        assert!(convert(&first).is_empty());
    }

    #[test]
    fn test_table_in_sync_with_declarations() {
        // The lexer's string table must be exactly the converter's output
        // over the embedded declaration block.
        let expected: Vec<String> = TOKEN_NAMES
            .iter()
            .map(|name| format!("\"{}\",", name))
            .collect();
        assert_eq!(convert(TOKEN_DECLARATIONS), expected);
    }
}
