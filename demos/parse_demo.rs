//! Demonstrates lexing and parsing Perfection code through the library API

use perflang::lexer::tokenize;
use perflang::parser::Parser;

fn main() {
    let examples = vec![
        ("Arithmetic", "1 + 2 * 3;"),
        ("Comparison", "(price - discount) * 1.2 <= limit;"),
        ("Unary operators", "!-x;"),
        ("Radix literals", "0xFF % 0b101;"),
        ("Reserved syntax", "func add() {}"),
    ];

    for (name, code) in examples {
        println!("\n=== {} ===", name);
        println!("Code: {}", code);

        let tokens = match tokenize(code) {
            Ok(tokens) => tokens,
            Err(e) => {
                println!("✗ Lexical error: {}", e);
                continue;
            }
        };
        println!("  Tokens: {}", tokens.len());

        let mut parser = Parser::new(tokens);
        match parser.parse() {
            Ok(program) => {
                println!("✓ Successfully parsed!");
                println!("  Statements: {}", program.statements.len());
            }
            Err(e) => {
                println!("✗ Parse error: {}", e);
            }
        }
    }
}
