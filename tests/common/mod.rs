#![allow(dead_code)]

use moss_lexer::{Lexer, Location, Tag, Token, tokenize};

/// Builds a `Location` from a `(start_line, start_column, end_line,
/// end_column)` tuple to keep expectation tables readable.
pub fn loc(
    (start_line, start_column, end_line, end_column): (usize, usize, usize, usize),
) -> Location {
    Location {
        start_line,
        start_column,
        end_line,
        end_column,
    }
}

/// Scans the first token of `input`.
pub fn first_token(input: &str) -> Token {
    Lexer::new(input.as_bytes())
        .next_token()
        .expect("next_token failed")
}

/// Lexes `input` and asserts it yields exactly the given (tag, text)
/// sequence, ignoring locations.
pub fn assert_tags(input: &str, expected: &[(Tag, &str)]) {
    let tokens = tokenize(input).expect("tokenize failed");
    let actual: Vec<(Tag, &str)> = tokens.iter().map(|t| (t.tag, t.text.as_str())).collect();
    assert_eq!(actual, expected, "token mismatch for {input:?}");
}
