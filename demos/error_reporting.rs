//! Demonstrate error reporting for invalid Moss input.

fn main() {
    // Unterminated string literal
    match moss_lexer::tokenize("greeting = \"Hello") {
        Ok(_) => println!("Tokenized OK (unexpected)"),
        Err(moss_lexer::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: {}", e.location);
        }
        Err(moss_lexer::Error::Io(e)) => {
            println!("Stream error: {e}");
        }
    }

    println!();

    // Character that cannot start a token
    match moss_lexer::tokenize("x = 1 @ 2") {
        Ok(_) => println!("Tokenized OK (unexpected)"),
        Err(moss_lexer::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: {}", e.location);
        }
        Err(moss_lexer::Error::Io(e)) => {
            println!("Stream error: {e}");
        }
    }
}
