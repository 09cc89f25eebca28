//! Buffered character source with one-level pushback.

use std::io::{self, BufReader, Read};
use std::str;

use crate::position::Position;

/// Streaming character reader feeding the token scanner.
///
/// Decodes UTF-8 one character at a time from a buffered reader, keeps
/// the position tracker in step with every consumed character, and lets
/// the scanner return the most recent character to the stream.
pub(crate) struct Source<R> {
    reader: BufReader<R>,
    position: Position,
    pending: Option<char>,
    exhausted: bool,
}

impl<R: Read> Source<R> {
    pub(crate) fn new(src: R) -> Self {
        Self {
            reader: BufReader::new(src),
            position: Position::new(),
            pending: None,
            exhausted: false,
        }
    }

    /// Line of the most recently consumed character.
    pub(crate) const fn line(&self) -> usize {
        self.position.line()
    }

    /// Column of the most recently consumed character.
    pub(crate) const fn column(&self) -> usize {
        self.position.column()
    }

    /// Delivers the next character, or `None` at end of input.
    ///
    /// A pushed-back character is re-delivered first. Every delivery
    /// advances the position, re-deliveries included, so the position
    /// always reflects the characters consumed so far. Once the stream
    /// is exhausted the reader is not polled again.
    pub(crate) fn read(&mut self) -> io::Result<Option<char>> {
        let ch = match self.pending.take() {
            Some(ch) => Some(ch),
            None if self.exhausted => None,
            None => self.decode_char()?,
        };
        let Some(ch) = ch else {
            self.exhausted = true;
            return Ok(None);
        };
        self.position.advance(ch);
        Ok(Some(ch))
    }

    /// Returns `ch` to the stream so the next `read` re-delivers it,
    /// rolling the position back to match.
    ///
    /// May be called at most once between two reads.
    pub(crate) fn unread(&mut self, ch: char) {
        debug_assert!(self.pending.is_none(), "single-level pushback exceeded");
        self.pending = Some(ch);
        self.position.retreat();
    }

    fn decode_char(&mut self) -> io::Result<Option<char>> {
        let mut bytes = [0_u8; 4];
        if !self.read_byte(&mut bytes[..1])? {
            return Ok(None);
        }
        let len = match bytes[0] {
            0x00..=0x7F => return Ok(Some(char::from(bytes[0]))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(invalid_utf8()),
        };
        self.reader.read_exact(&mut bytes[1..len])?;
        let decoded = str::from_utf8(&bytes[..len]).map_err(|_| invalid_utf8())?;
        Ok(decoded.chars().next())
    }

    /// Reads exactly one byte into `buf`; `false` at end of input.
    fn read_byte(&mut self, buf: &mut [u8]) -> io::Result<bool> {
        loop {
            match self.reader.read(buf) {
                Ok(0) => return Ok(false),
                Ok(_) => return Ok(true),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        "stream did not contain valid UTF-8",
    )
}
