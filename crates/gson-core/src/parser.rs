//! Recursive-descent parser — converts a text buffer into a [`Value`] tree.
//!
//! Every scanner has the same shape: it takes the whole input buffer and a start
//! offset, and returns the recognized value together with the offset just past it.
//! No scanner holds or mutates shared state, so any of them can be called on its own
//! with `(input, offset)`.
//!
//! # Key design decisions
//!
//! - **Single dispatch point**: `scan_value` is the only place that picks a grammar
//!   alternative from the lookahead byte. The array and object scanners recurse through
//!   it for their elements.
//! - **Lexical number typing**: a literal without `.` or exponent becomes
//!   [`Value::Integer`], anything else [`Value::Float`]. The exponent sign is mandatory
//!   (`1e+5` is accepted, `1e5` is not).
//! - **No escape decoding**: a string ends at the first `"`, backslashes included.
//! - **Structural errors win**: running out of input inside a container reports
//!   `UnterminatedArray` / `UnterminatedObject` rather than a generic end-of-input.
//! - **Bounded nesting**: containers deeper than [`ParseOptions::max_depth`] fail with
//!   `DepthLimitExceeded` instead of exhausting the stack.

use crate::error::{ErrorKind, ParseError, Result};
use crate::scanner::{
    consume_literal, expect_byte_at, is_digit, is_number_start, peek, skip_whitespace,
};
use crate::value::{Map, Value};
use bstr::BString;
use tracing::{debug, trace};

/// A scanned item and the offset just past it.
pub type Scan<T> = Result<(T, usize)>;

/// Nesting limit used by [`parse`] and the standalone scanners.
///
/// Each level costs a dispatcher frame plus an array or object frame; 128 levels
/// stay well inside a 2 MiB thread stack even in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tuning knobs for [`parse_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of arrays/objects open at once.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse a complete document.
///
/// The buffer must hold exactly one value, optionally surrounded by whitespace;
/// anything after it fails with [`ErrorKind::TrailingInput`].
///
/// ```
/// use gson_core::{parse, Value};
/// assert_eq!(parse("[1, 2.5]").unwrap(), Value::Array(vec![Value::Integer(1), Value::Float(2.5)]));
/// ```
pub fn parse(input: impl AsRef<[u8]>) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

/// [`parse`] with a caller-chosen nesting limit.
pub fn parse_with_options(input: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Value> {
    let input = input.as_ref();
    debug!(len = input.len(), max_depth = options.max_depth, "parsing document");

    let result = value_at(input, 0, Depth::new(options.max_depth)).and_then(|(value, end)| {
        match peek(input, end) {
            None => Ok(value),
            Some(byte) => Err(ParseError::new(
                ErrorKind::TrailingInput {
                    found: byte as char,
                },
                end,
            )),
        }
    });

    match &result {
        Ok(value) => debug!(kind = %value.kind(), "parsed document"),
        Err(err) => debug!(error = %err, "parse failed"),
    }
    result
}

/// Parse one value from the front of `input` and report where scanning stopped.
///
/// Whitespace after the value is consumed; any other trailing bytes are left for
/// the caller. The returned offset never exceeds `input.len()`.
pub fn parse_prefix(input: impl AsRef<[u8]>) -> Scan<Value> {
    let input = input.as_ref();
    let (value, end) = value_at(input, 0, Depth::new(DEFAULT_MAX_DEPTH))?;
    trace!(consumed = end, len = input.len(), "parsed prefix");
    Ok((value, end))
}

/// Remaining nesting budget, threaded by value through the container scanners.
#[derive(Debug, Clone, Copy)]
struct Depth {
    level: usize,
    limit: usize,
}

impl Depth {
    fn new(limit: usize) -> Self {
        Self { level: 0, limit }
    }

    /// Enter one more container opened at `pos`.
    fn descend(self, pos: usize) -> Result<Self> {
        if self.level >= self.limit {
            return Err(ParseError::new(
                ErrorKind::DepthLimitExceeded { limit: self.limit },
                pos,
            ));
        }
        Ok(Self {
            level: self.level + 1,
            ..self
        })
    }
}

/// Value dispatcher: skip whitespace, pick a scanner from one lookahead byte,
/// run it, then skip trailing whitespace.
pub fn scan_value(input: &[u8], pos: usize) -> Scan<Value> {
    value_at(input, pos, Depth::new(DEFAULT_MAX_DEPTH))
}

fn value_at(input: &[u8], pos: usize, depth: Depth) -> Scan<Value> {
    let pos = skip_whitespace(input, pos);
    let byte = peek(input, pos)
        .ok_or_else(|| ParseError::new(ErrorKind::UnexpectedEndOfInput, pos))?;

    let (value, next) = match byte {
        b'"' => {
            let (text, next) = scan_string(input, pos)?;
            (Value::String(text), next)
        }
        b'n' => scan_null(input, pos)?,
        b't' => scan_true(input, pos)?,
        b'f' => scan_false(input, pos)?,
        b'[' => array_at(input, pos, depth)?,
        b'{' => object_at(input, pos, depth)?,
        b if is_number_start(b) => scan_number(input, pos)?,
        other => {
            return Err(ParseError::new(
                ErrorKind::UnrecognizedToken {
                    found: other as char,
                },
                pos,
            ))
        }
    };

    Ok((value, skip_whitespace(input, next)))
}

pub fn scan_null(input: &[u8], pos: usize) -> Scan<Value> {
    let next = consume_literal(input, pos, "null")?;
    Ok((Value::Null, next))
}

pub fn scan_true(input: &[u8], pos: usize) -> Scan<Value> {
    let next = consume_literal(input, pos, "true")?;
    Ok((Value::Boolean(true), next))
}

pub fn scan_false(input: &[u8], pos: usize) -> Scan<Value> {
    let next = consume_literal(input, pos, "false")?;
    Ok((Value::Boolean(false), next))
}

/// Scan a `"`-delimited string starting at `pos`.
///
/// The text runs to the next `"` with no escape handling, so `"a\"` is the complete
/// string `a\`. Returns the bytes between the quotes, unmodified and not checked for
/// UTF-8, and the offset after the closing quote. A missing opening quote is reported as [`ErrorKind::ExpectedStringKey`],
/// since object keys are the only place a string is required without the dispatcher
/// having already seen the quote.
pub fn scan_string(input: &[u8], pos: usize) -> Scan<BString> {
    match peek(input, pos) {
        Some(b'"') => {}
        Some(other) => {
            return Err(ParseError::new(
                ErrorKind::ExpectedStringKey {
                    found: other as char,
                },
                pos,
            ))
        }
        None => return Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, pos)),
    }

    let start = pos + 1;
    let len = input[start..]
        .iter()
        .position(|&b| b == b'"')
        .ok_or_else(|| ParseError::new(ErrorKind::UnterminatedString, pos))?;
    let end = start + len;

    Ok((BString::from(&input[start..end]), end + 1))
}

/// Scan a number literal: `-? digit+ ('.' digit+)? ([eE] [+-] digit+)?`.
///
/// Leading zeros are allowed (`01` is 1). A literal with neither fraction nor
/// exponent is an `i64`; otherwise the whole span is converted to `f64`. Values that
/// do not fit (integer overflow, infinite floats) fail with
/// [`ErrorKind::InvalidNumberFormat`].
pub fn scan_number(input: &[u8], pos: usize) -> Scan<Value> {
    let mut i = pos;
    if expect_byte_at(input, i, b'-') {
        i += 1;
    }

    let int_start = i;
    i = skip_digits(input, i);
    if i == int_start {
        return Err(invalid_number(input, pos, i, "expected a digit"));
    }

    let mut is_float = false;

    if expect_byte_at(input, i, b'.') {
        i += 1;
        let frac_start = i;
        i = skip_digits(input, i);
        if i == frac_start {
            return Err(invalid_number(input, pos, i, "expected a digit after '.'"));
        }
        is_float = true;
    }

    if matches!(peek(input, i), Some(b'e' | b'E')) {
        i += 1;
        match peek(input, i) {
            Some(b'+' | b'-') => i += 1,
            _ => {
                return Err(invalid_number(
                    input,
                    pos,
                    i,
                    "exponent requires an explicit '+' or '-' sign",
                ))
            }
        }
        let exp_start = i;
        i = skip_digits(input, i);
        if i == exp_start {
            return Err(invalid_number(input, pos, i, "expected a digit in exponent"));
        }
        is_float = true;
    }

    let literal = String::from_utf8_lossy(&input[pos..i]);
    let value = if is_float {
        let f = literal
            .parse::<f64>()
            .map_err(|e| invalid_number(input, pos, i, &e.to_string()))?;
        if !f.is_finite() {
            return Err(invalid_number(input, pos, i, "out of range for a 64-bit float"));
        }
        Value::Float(f)
    } else {
        let n = literal
            .parse::<i64>()
            .map_err(|e| invalid_number(input, pos, i, &e.to_string()))?;
        Value::Integer(n)
    };

    Ok((value, i))
}

fn skip_digits(input: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < input.len() && is_digit(input[i]) {
        i += 1;
    }
    i
}

/// Build an `InvalidNumberFormat` error for the literal spanning `start..end`,
/// reported at `start`.
fn invalid_number(input: &[u8], start: usize, end: usize, reason: &str) -> ParseError {
    let end = end.min(input.len());
    ParseError::new(
        ErrorKind::InvalidNumberFormat {
            literal: String::from_utf8_lossy(&input[start..end]).into_owned(),
            reason: reason.to_string(),
        },
        start,
    )
}

/// Scan a `[`-delimited array starting at `pos`.
pub fn scan_array(input: &[u8], pos: usize) -> Scan<Value> {
    array_at(input, pos, Depth::new(DEFAULT_MAX_DEPTH))
}

fn array_at(input: &[u8], pos: usize, depth: Depth) -> Scan<Value> {
    debug_assert!(expect_byte_at(input, pos, b'['));
    let depth = depth.descend(pos)?;
    let mut items = Vec::new();

    let mut i = skip_whitespace(input, pos + 1);
    match peek(input, i) {
        None => return Err(ParseError::new(ErrorKind::UnterminatedArray, i)),
        Some(b']') => return Ok((Value::Array(items), i + 1)),
        Some(_) => {}
    }

    loop {
        let (item, next) = value_at(input, i, depth)?;
        items.push(item);
        i = next;

        match peek(input, i) {
            None => return Err(ParseError::new(ErrorKind::UnterminatedArray, i)),
            Some(b']') => return Ok((Value::Array(items), i + 1)),
            Some(b',') => {
                // A comma must be followed by another element, never by `]` or EOF.
                i = skip_whitespace(input, i + 1);
                if i >= input.len() {
                    return Err(ParseError::new(ErrorKind::UnterminatedArray, i));
                }
            }
            Some(other) => {
                return Err(ParseError::new(
                    ErrorKind::ExpectedCommaOrCloseBracket {
                        found: other as char,
                    },
                    i,
                ))
            }
        }
    }
}

/// Scan a `{`-delimited object starting at `pos`. A repeated key keeps its last value.
pub fn scan_object(input: &[u8], pos: usize) -> Scan<Value> {
    object_at(input, pos, Depth::new(DEFAULT_MAX_DEPTH))
}

fn object_at(input: &[u8], pos: usize, depth: Depth) -> Scan<Value> {
    debug_assert!(expect_byte_at(input, pos, b'{'));
    let depth = depth.descend(pos)?;
    let mut map = Map::new();

    let mut i = skip_whitespace(input, pos + 1);
    match peek(input, i) {
        None => return Err(ParseError::new(ErrorKind::UnterminatedObject, i)),
        Some(b'}') => return Ok((Value::Object(map), i + 1)),
        Some(_) => {}
    }

    loop {
        i = skip_whitespace(input, i);
        if i >= input.len() {
            return Err(ParseError::new(ErrorKind::UnterminatedObject, i));
        }
        let (key, next) = scan_string(input, i)?;

        i = skip_whitespace(input, next);
        match peek(input, i) {
            None => return Err(ParseError::new(ErrorKind::UnterminatedObject, i)),
            Some(b':') => i += 1,
            Some(other) => {
                return Err(ParseError::new(
                    ErrorKind::ExpectedColon {
                        found: other as char,
                    },
                    i,
                ))
            }
        }

        i = skip_whitespace(input, i);
        if i >= input.len() {
            return Err(ParseError::new(ErrorKind::UnterminatedObject, i));
        }
        let (value, next) = value_at(input, i, depth)?;
        map.insert(key, value);
        i = next;

        match peek(input, i) {
            None => return Err(ParseError::new(ErrorKind::UnterminatedObject, i)),
            Some(b'}') => return Ok((Value::Object(map), i + 1)),
            Some(b',') => i += 1,
            Some(other) => {
                return Err(ParseError::new(
                    ErrorKind::ExpectedCommaOrCloseBrace {
                        found: other as char,
                    },
                    i,
                ))
            }
        }
    }
}
