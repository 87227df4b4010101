// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::{ParseError, Value};

/// The fixed keywords and the values they produce.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    const fn from_first_byte(byte: u8) -> Option<Self> {
        match byte {
            b'n' => Some(Literal::Null),
            b't' => Some(Literal::True),
            b'f' => Some(Literal::False),
            _ => None,
        }
    }

    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Literal::Null => b"null",
            Literal::True => b"true",
            Literal::False => b"false",
        }
    }

    const fn value(self) -> Value {
        match self {
            Literal::Null => Value::Null,
            Literal::True => Value::True,
            Literal::False => Value::False,
        }
    }
}

/// Matches `null`, `true` or `false` at the cursor.
///
/// The keyword must match byte for byte; a truncated or misspelled keyword is
/// a [`ParseError::InvalidValue`]. On success the cursor is moved past the
/// keyword.
pub fn parse_literal(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let literal = cursor
        .peek()
        .and_then(Literal::from_first_byte)
        .ok_or(ParseError::InvalidValue)?;
    let keyword = literal.as_bytes();

    if !cursor.rest().starts_with(keyword) {
        log::debug!(
            "Literal: expected {:?} at {}",
            literal,
            cursor.position()
        );
        return Err(ParseError::InvalidValue);
    }

    cursor.advance(keyword.len());
    log::trace!("Literal: matched {:?}", literal);
    Ok(literal.value())
}
