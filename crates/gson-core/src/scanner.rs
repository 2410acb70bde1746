//! Byte classifiers and cursor utilities shared by every scanner.
//!
//! Nothing here holds state: each function takes the input buffer and an offset
//! and answers from those alone. Offsets past the end of the buffer are treated as
//! "no byte" rather than indexing out of range.

use crate::error::{ErrorKind, ParseError, Result};

/// Whitespace between tokens: space, tab, line feed, carriage return.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// A number literal may open with a minus sign or a digit, never `+`.
pub fn is_number_start(byte: u8) -> bool {
    byte == b'-' || is_digit(byte)
}

/// The byte at `pos`, or `None` at or past the end of the buffer.
pub fn peek(input: &[u8], pos: usize) -> Option<u8> {
    input.get(pos).copied()
}

/// Advance past any whitespace starting at `pos`.
pub fn skip_whitespace(input: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < input.len() && is_whitespace(input[i]) {
        i += 1;
    }
    i
}

/// Does the byte at `pos` equal `expected`?
pub fn expect_byte_at(input: &[u8], pos: usize, expected: u8) -> bool {
    peek(input, pos) == Some(expected)
}

/// Match `literal` byte-for-byte at `pos` and return the offset just past it.
///
/// Fails with [`ErrorKind::UnexpectedToken`] when the buffer is too short or any
/// byte differs; `found` holds whatever was actually there (possibly truncated).
pub fn consume_literal(input: &[u8], pos: usize, literal: &'static str) -> Result<usize> {
    let end = pos + literal.len();
    match input.get(pos..end) {
        Some(window) if window == literal.as_bytes() => Ok(end),
        _ => {
            let start = pos.min(input.len());
            let stop = end.min(input.len());
            Err(ParseError::new(
                ErrorKind::UnexpectedToken {
                    expected: literal,
                    found: String::from_utf8_lossy(&input[start..stop]).into_owned(),
                },
                pos,
            ))
        }
    }
}
