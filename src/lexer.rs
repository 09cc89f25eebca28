use std::fmt;
use std::io::Read;

use crate::Error;
use crate::source::Source;
use crate::token::{Location, Tag, Token};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// End of input reached inside a string literal.
    UnterminatedString,
    /// Character that cannot start any token.
    InvalidCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "invalid character '{ch}'")
            }
        }
    }
}

/// Error produced during scanning.
///
/// The location is a one-character span: the opening quote for an
/// unterminated string, the offending character otherwise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: Location,
}

/// Tokenize a Moss source string into a sequence of tokens.
///
/// Collects every token up to end of input. The end-of-input token
/// itself is not included; a trailing synthetic `Newline` is, so a
/// source that ends mid-statement still terminates its last statement.
///
/// # Errors
///
/// Returns `Error` on unterminated string literals or characters that
/// cannot start a token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(input.as_bytes());
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.tag == Tag::Eof {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

/// Streaming tokenizer for Moss source code.
///
/// One instance per input stream; the stream is buffered internally.
/// `next_token` is the sole operation: it either returns the next token
/// or fails, and once the end-of-input token has been returned, every
/// subsequent call returns it again at the same location.
///
/// The lexer remembers the tag of the most recently emitted token. A
/// line break (or end of input) that directly follows a token which can
/// end a statement (see [`Tag::ends_statement`]) is emitted as a
/// `Newline` token instead of being skipped as whitespace, in the style
/// of Go's semicolon insertion.
pub struct Lexer<R> {
    source: Source<R>,
    last_tag: Option<Tag>,
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer reading from `src`.
    pub fn new(src: R) -> Self {
        Self {
            source: Source::new(src),
            last_tag: None,
        }
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    ///
    /// Returns `Error::Lex` for unterminated strings and invalid
    /// characters, and `Error::Io` for failures of the underlying
    /// stream, propagated unchanged.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let token = self.scan()?;
        self.last_tag = Some(token.tag);
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, Error> {
        self.skip_spaces_and_comments()?;

        let Some(ch) = self.source.read()? else {
            return Ok(self.end_of_input_token());
        };
        let start = Location::point(self.source.line(), self.source.column());

        match ch {
            '\n' => Ok(self.token(Tag::Newline, "\n".to_string(), start)),
            '}' if self.newline_required() => {
                // Re-deliver the brace on the next call; by then the
                // last tag is Newline and the policy no longer fires.
                self.source.unread('}');
                Ok(Token {
                    tag: Tag::Newline,
                    text: "\n".to_string(),
                    location: start,
                })
            }
            '}' => Ok(self.token(Tag::RBrace, "}".to_string(), start)),
            '"' => self.scan_string(start),
            '0' => self.scan_zero(start),
            _ if ch.is_ascii_digit() => self.scan_int(ch, start),
            _ if is_identifier_start(ch) => self.scan_identifier(ch, start),
            _ => self.scan_operator(ch, start),
        }
    }

    /// Consumes whitespace and `#` line comments.
    ///
    /// Returns early, with the line break pushed back, when the break
    /// must become a terminator token: the main dispatch then emits it
    /// on the immediately following read.
    fn skip_spaces_and_comments(&mut self) -> Result<(), Error> {
        let mut in_comment = false;
        while let Some(ch) = self.source.read()? {
            match ch {
                '\n' => {
                    in_comment = false;
                    if self.newline_required() {
                        self.source.unread('\n');
                        return Ok(());
                    }
                }
                '#' => in_comment = true,
                _ if in_comment || ch.is_whitespace() => {}
                _ => {
                    self.source.unread(ch);
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    fn end_of_input_token(&self) -> Token {
        let location = Location::point(self.source.line(), self.source.column() + 1);
        if self.newline_required() {
            Token {
                tag: Tag::Newline,
                text: "\n".to_string(),
                location,
            }
        } else {
            Token {
                tag: Tag::Eof,
                text: String::new(),
                location,
            }
        }
    }

    fn scan_string(&mut self, start: Location) -> Result<Token, Error> {
        let mut text = String::new();
        loop {
            match self.source.read()? {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        location: Location::single(start.start_line, start.start_column),
                    }
                    .into());
                }
                Some('"') => break,
                Some(ch) => text.push(ch),
            }
        }
        Ok(self.token(Tag::LiteralString, text, start))
    }

    /// A leading `0` is a literal on its own unless a `.` follows;
    /// `0123` lexes as the integer `0` followed by the integer `123`.
    fn scan_zero(&mut self, start: Location) -> Result<Token, Error> {
        match self.source.read()? {
            Some('.') => return self.scan_float("0.".to_string(), start),
            Some(ch) => self.source.unread(ch),
            None => {}
        }
        Ok(self.token(Tag::LiteralInt, "0".to_string(), start))
    }

    fn scan_int(&mut self, first: char, start: Location) -> Result<Token, Error> {
        let mut text = String::from(first);
        while let Some(ch) = self.source.read()? {
            if ch == '.' {
                text.push(ch);
                return self.scan_float(text, start);
            }
            if !ch.is_ascii_digit() {
                self.source.unread(ch);
                break;
            }
            text.push(ch);
        }
        Ok(self.token(Tag::LiteralInt, text, start))
    }

    fn scan_float(&mut self, mut text: String, start: Location) -> Result<Token, Error> {
        while let Some(ch) = self.source.read()? {
            if !ch.is_ascii_digit() {
                self.source.unread(ch);
                break;
            }
            text.push(ch);
        }
        Ok(self.token(Tag::LiteralFloat, text, start))
    }

    fn scan_identifier(&mut self, first: char, start: Location) -> Result<Token, Error> {
        let mut text = String::from(first);
        while let Some(ch) = self.source.read()? {
            if !is_identifier_char(ch) {
                self.source.unread(ch);
                break;
            }
            text.push(ch);
        }
        let tag = keyword_tag(&text).unwrap_or(Tag::Identifier);
        Ok(self.token(tag, text, start))
    }

    /// Greedy longest-prefix match against the operator table: extend
    /// the accumulated spelling one character at a time and back off
    /// the first extension that leaves the table. A single-character
    /// operator at hard end of input needs no extension attempt at all.
    fn scan_operator(&mut self, first: char, start: Location) -> Result<Token, Error> {
        let mut text = String::from(first);
        let Some(mut tag) = operator_tag(&text) else {
            return Err(LexError {
                kind: LexErrorKind::InvalidCharacter(first),
                location: Location::single(start.start_line, start.start_column),
            }
            .into());
        };
        while let Some(ch) = self.source.read()? {
            text.push(ch);
            match operator_tag(&text) {
                Some(longer) => tag = longer,
                None => {
                    text.pop();
                    self.source.unread(ch);
                    break;
                }
            }
        }
        Ok(self.token(tag, text, start))
    }

    /// Completes `start` with the half-open end position and builds the
    /// token.
    fn token(&self, tag: Tag, text: String, mut location: Location) -> Token {
        location.end_line = self.source.line();
        location.end_column = self.source.column() + 1;
        Token {
            tag,
            text,
            location,
        }
    }

    fn newline_required(&self) -> bool {
        self.last_tag.is_some_and(Tag::ends_statement)
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

fn is_identifier_char(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

/// Keyword spellings; any other identifier text is `Tag::Identifier`.
fn keyword_tag(text: &str) -> Option<Tag> {
    let tag = match text {
        "def" => Tag::KwDef,
        "if" => Tag::KwIf,
        "else" => Tag::KwElse,
        "elsif" => Tag::KwElsif,
        "while" => Tag::KwWhile,
        "break" => Tag::KwBreak,
        "continue" => Tag::KwContinue,
        "return" => Tag::KwReturn,
        "true" => Tag::KwTrue,
        "false" => Tag::KwFalse,
        "nil" => Tag::KwNil,
        _ => return None,
    };
    Some(tag)
}

/// Fixed table of one- and two-character operator spellings.
///
/// `}` is absent on purpose: the dispatcher handles it structurally so
/// the terminator policy can intervene first.
fn operator_tag(text: &str) -> Option<Tag> {
    let tag = match text {
        "(" => Tag::LParen,
        ")" => Tag::RParen,
        "[" => Tag::LBracket,
        "]" => Tag::RBracket,
        "{" => Tag::LBrace,
        "->" => Tag::Arrow,
        "," => Tag::Comma,
        ";" => Tag::Semicolon,
        ":" => Tag::Colon,
        "=" => Tag::Let,
        "==" => Tag::Eq,
        "!=" => Tag::Ne,
        ">=" => Tag::Ge,
        "<=" => Tag::Le,
        ">" => Tag::Gt,
        "<" => Tag::Lt,
        "+" => Tag::Add,
        "-" => Tag::Sub,
        "*" => Tag::Mul,
        "/" => Tag::Div,
        "%" => Tag::Mod,
        "+=" => Tag::LetAdd,
        "-=" => Tag::LetSub,
        "*=" => Tag::LetMul,
        "/=" => Tag::LetDiv,
        "%=" => Tag::LetMod,
        "!" => Tag::Bang,
        _ => return None,
    };
    Some(tag)
}
