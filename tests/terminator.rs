//! Statement-terminator insertion: a line break or end of input after a
//! token that can end a statement becomes a `Newline` token; anywhere
//! else it is plain whitespace.

mod common;

use common::{assert_tags, loc};
use moss_lexer::{Lexer, Location, Tag, Token};

/// Spellings whose tags trigger terminator insertion, with the token
/// text the spelling lexes to.
const TRIGGERING: &[(&str, Tag, &str)] = &[
    (")", Tag::RParen, ")"),
    ("]", Tag::RBracket, "]"),
    ("}", Tag::RBrace, "}"),
    ("break", Tag::KwBreak, "break"),
    ("continue", Tag::KwContinue, "continue"),
    ("return", Tag::KwReturn, "return"),
    ("true", Tag::KwTrue, "true"),
    ("false", Tag::KwFalse, "false"),
    ("nil", Tag::KwNil, "nil"),
    ("hoge", Tag::Identifier, "hoge"),
    ("123", Tag::LiteralInt, "123"),
    ("12.3", Tag::LiteralFloat, "12.3"),
    ("\"Hello\"", Tag::LiteralString, "Hello"),
];

fn next(lexer: &mut Lexer<&[u8]>) -> Token {
    lexer.next_token().expect("next_token failed")
}

#[test]
fn end_of_input_inserts_terminator_then_eof() {
    for &(src, tag, text) in TRIGGERING {
        let mut lexer = Lexer::new(src.as_bytes());
        let after = src.len() + 1;

        let token = next(&mut lexer);
        assert_eq!((token.tag, token.text.as_str()), (tag, text), "src {src:?}");

        // Synthetic terminator immediately after the token, then EOF
        // pinned to the same spot on every subsequent call.
        assert_eq!(
            next(&mut lexer),
            Token {
                tag: Tag::Newline,
                text: "\n".to_string(),
                location: Location::point(1, after),
            },
            "src {src:?}"
        );
        let eof = next(&mut lexer);
        assert_eq!(
            eof,
            Token {
                tag: Tag::Eof,
                text: String::new(),
                location: Location::point(1, after),
            },
            "src {src:?}"
        );
        assert_eq!(next(&mut lexer), eof, "src {src:?}");
    }
}

#[test]
fn line_break_becomes_terminator_token() {
    for &(src, tag, _text) in TRIGGERING {
        let input = format!("{src}\n");
        let mut lexer = Lexer::new(input.as_bytes());
        let after = src.len() + 1;

        assert_eq!(next(&mut lexer).tag, tag, "src {src:?}");

        let newline = next(&mut lexer);
        assert_eq!(newline.tag, Tag::Newline, "src {src:?}");
        assert_eq!(newline.location, loc((1, after, 1, after + 1)), "src {src:?}");

        assert_eq!(next(&mut lexer).tag, Tag::Eof, "src {src:?}");
    }
}

#[test]
fn no_terminator_after_non_triggering_tags() {
    // Opening brackets, operators, and most keywords leave the line
    // break as plain whitespace.
    assert_tags("(\n", &[(Tag::LParen, "(")]);
    assert_tags("[\n", &[(Tag::LBracket, "[")]);
    assert_tags("{\n", &[(Tag::LBrace, "{")]);
    assert_tags(",\n", &[(Tag::Comma, ",")]);
    assert_tags("+\n", &[(Tag::Add, "+")]);
    assert_tags("=\n", &[(Tag::Let, "=")]);
    assert_tags("->\n", &[(Tag::Arrow, "->")]);
    assert_tags("def\n", &[(Tag::KwDef, "def")]);
    assert_tags("if\n", &[(Tag::KwIf, "if")]);
    assert_tags("else\n", &[(Tag::KwElse, "else")]);
    assert_tags("while\n", &[(Tag::KwWhile, "while")]);
}

#[test]
fn consecutive_breaks_collapse_to_one_terminator() {
    assert_tags(
        ")\n\n\n",
        &[(Tag::RParen, ")"), (Tag::Newline, "\n")],
    );
}

#[test]
fn blank_input_produces_no_terminator() {
    assert_tags("", &[]);
    assert_tags("\n\n  \t\n", &[]);
}

#[test]
fn closing_brace_forces_terminator_first() {
    let mut lexer = Lexer::new("a}".as_bytes());

    assert_eq!(
        next(&mut lexer),
        Token {
            tag: Tag::Identifier,
            text: "a".to_string(),
            location: loc((1, 1, 1, 2)),
        }
    );
    // Zero-width terminator where the brace starts; the brace itself is
    // re-read on the following call.
    assert_eq!(
        next(&mut lexer),
        Token {
            tag: Tag::Newline,
            text: "\n".to_string(),
            location: Location::point(1, 2),
        }
    );
    assert_eq!(
        next(&mut lexer),
        Token {
            tag: Tag::RBrace,
            text: "}".to_string(),
            location: loc((1, 2, 1, 3)),
        }
    );
    // The brace is itself a statement end, so end of input inserts one
    // more terminator before EOF.
    assert_eq!(next(&mut lexer).tag, Tag::Newline);
    assert_eq!(next(&mut lexer).tag, Tag::Eof);
}

#[test]
fn brace_after_newline_needs_no_terminator() {
    assert_tags(
        "a\n}",
        &[
            (Tag::Identifier, "a"),
            (Tag::Newline, "\n"),
            (Tag::RBrace, "}"),
            (Tag::Newline, "\n"),
        ],
    );
}

#[test]
fn mid_expression_break_is_ignored() {
    assert_tags(
        "1 +\n2\n",
        &[
            (Tag::LiteralInt, "1"),
            (Tag::Add, "+"),
            (Tag::LiteralInt, "2"),
            (Tag::Newline, "\n"),
        ],
    );
}

#[test]
fn comment_line_does_not_shield_the_terminator() {
    // The break after the comment still terminates the statement that
    // ended before the comment began.
    assert_tags(
        "x # explain\ny\n",
        &[
            (Tag::Identifier, "x"),
            (Tag::Newline, "\n"),
            (Tag::Identifier, "y"),
            (Tag::Newline, "\n"),
        ],
    );
}
