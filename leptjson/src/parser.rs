// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::literal::parse_literal;
use crate::number_parser::parse_number;
use crate::{ParseError, Value};

/// Parses one value at the cursor, choosing the rule from the next byte.
fn parse_value(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    match cursor.peek() {
        None => Err(ParseError::ExpectValue),
        Some(b'n' | b't' | b'f') => parse_literal(cursor),
        Some(_) => parse_number(cursor),
    }
}

/// Parses exactly one value, optionally surrounded by whitespace.
fn parse_root(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    cursor.skip_whitespace();
    let value = parse_value(cursor)?;
    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        log::debug!("Parser: trailing content at {}", cursor.position());
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}

/// Parses `input` into `value` in place.
///
/// `value` is reset to [`Value::Null`] before parsing starts and again if
/// parsing fails, so it never keeps a stale or partial result.
///
/// # Example
/// ```
/// use leptjson::{parse_into, ParseError, Value};
///
/// let mut value = Value::True;
/// assert_eq!(parse_into(&mut value, b"nul"), Err(ParseError::InvalidValue));
/// assert_eq!(value, Value::Null);
///
/// parse_into(&mut value, b" 42 ").unwrap();
/// assert_eq!(value.get_number(), 42.0);
/// ```
pub fn parse_into(value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    value.reset();
    let mut cursor = Cursor::new(input);
    // Only written once the whole input is accepted
    *value = parse_root(&mut cursor)?;
    Ok(())
}

/// Parses a byte slice holding exactly one value.
///
/// # Example
/// ```
/// use leptjson::{parse_slice, Value};
///
/// assert_eq!(parse_slice(b"\tfalse\r\n"), Ok(Value::False));
/// ```
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    let mut value = Value::default();
    parse_into(&mut value, input)?;
    Ok(value)
}

/// Parses a string holding exactly one value.
///
/// # Example
/// ```
/// use leptjson::{parse, ParseError, ValueType};
///
/// assert_eq!(parse("null").map(|v| v.get_type()), Ok(ValueType::Null));
/// assert_eq!(parse("   "), Err(ParseError::ExpectValue));
/// assert_eq!(parse("1e400"), Err(ParseError::NumberTooBig));
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_slice(input.as_bytes())
}
