// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::cursor::Cursor;
use crate::{ParseError, Value};

/// Scanner states for `["-"] intpart [frac] [exp]`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Num {
    Start,
    Sign,
    LeadingZero,
    Integer,
    Decimal,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentDigits,
}

impl Num {
    /// States in which the number seen so far is complete.
    const fn is_accepting(self) -> bool {
        matches!(
            self,
            Num::LeadingZero | Num::Integer | Num::Fraction | Num::ExponentDigits
        )
    }
}

/// Extent of a grammatically valid number at the start of the input.
#[derive(Debug, PartialEq)]
struct NumberSpan {
    len: usize,
    #[cfg_attr(not(feature = "underflow-error"), allow(dead_code))]
    nonzero_mantissa: bool,
}

/// Validates the number grammar without consuming anything.
///
/// Returns the length of the number, or `InvalidValue` at the first byte that
/// breaks the grammar. A trailing byte that merely cannot continue a complete
/// number ends the scan; judging it is left to the caller.
fn scan_number(input: &[u8]) -> Result<NumberSpan, ParseError> {
    let mut state = Num::Start;
    let mut nonzero_mantissa = false;
    let mut len = 0;

    for &byte in input {
        let next = match (state, byte) {
            (Num::Start, b'-') => Num::Sign,
            (Num::Start | Num::Sign, b'0') => Num::LeadingZero,
            (Num::Start | Num::Sign, b'1'..=b'9') => Num::Integer,
            (Num::Integer, b'0'..=b'9') => Num::Integer,
            (Num::LeadingZero, b'0'..=b'9') => {
                log::debug!("Number: leading zero followed by digit at {}", len);
                return Err(ParseError::InvalidValue);
            }
            (Num::LeadingZero | Num::Integer, b'.') => Num::Decimal,
            (Num::Decimal | Num::Fraction, b'0'..=b'9') => Num::Fraction,
            (Num::LeadingZero | Num::Integer | Num::Fraction, b'e' | b'E') => Num::Exponent,
            (Num::Exponent, b'+' | b'-') => Num::ExponentSign,
            (Num::Exponent | Num::ExponentSign | Num::ExponentDigits, b'0'..=b'9') => {
                Num::ExponentDigits
            }
            _ => break,
        };
        if matches!(next, Num::Integer | Num::Fraction) && byte != b'0' {
            nonzero_mantissa = true;
        }
        state = next;
        len += 1;
    }

    if !state.is_accepting() {
        log::debug!("Number: incomplete in state {:?} at {}", state, len);
        return Err(ParseError::InvalidValue);
    }
    Ok(NumberSpan {
        len,
        nonzero_mantissa,
    })
}

/// Parses a number at the cursor.
///
/// The cursor is only advanced when a value is produced.
pub fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let rest = cursor.rest();
    let span = scan_number(rest)?;
    let digits = rest.get(..span.len).ok_or(ParseError::InvalidValue)?;
    let text = core::str::from_utf8(digits).map_err(|_| ParseError::InvalidValue)?;
    let number = f64::from_str(text).map_err(|_| ParseError::InvalidValue)?;

    if number.is_infinite() {
        log::debug!("Number: {} overflows f64", text);
        return Err(ParseError::NumberTooBig);
    }
    #[cfg(feature = "underflow-error")]
    if number == 0.0 && span.nonzero_mantissa {
        log::debug!("Number: {} underflows f64", text);
        return Err(ParseError::NumberTooSmall);
    }

    cursor.advance(span.len);
    log::trace!("Number: {} -> {}", text, number);
    Ok(Value::Number(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn scanned_len(input: &[u8]) -> Result<usize, ParseError> {
        scan_number(input).map(|span| span.len)
    }

    #[test]
    fn test_scan_accepts_grammar() {
        assert_eq!(scanned_len(b"0"), Ok(1));
        assert_eq!(scanned_len(b"-0"), Ok(2));
        assert_eq!(scanned_len(b"10"), Ok(2));
        assert_eq!(scanned_len(b"3.1416"), Ok(6));
        assert_eq!(scanned_len(b"1E+10"), Ok(5));
        assert_eq!(scanned_len(b"-1.5e-3"), Ok(7));
        assert_eq!(scanned_len(b"0e0"), Ok(3));
    }

    #[test]
    fn test_scan_stops_after_complete_number() {
        assert_eq!(scanned_len(b"12 3"), Ok(2));
        assert_eq!(scanned_len(b"1.5.3"), Ok(3));
        assert_eq!(scanned_len(b"0x10"), Ok(1));
        assert_eq!(scanned_len(b"1e5e"), Ok(3));
    }

    #[test]
    fn test_scan_rejects_bad_grammar() {
        let inputs: &[&[u8]] = &[
            b"",
            b"-",
            b"+1",
            b".1",
            b"1.",
            b"1.e3",
            b"1e",
            b"1e+",
            b"1E-",
            b"01",
            b"-01",
            b"00",
            b"--1",
            b"INF",
            b"nan",
        ];
        for input in inputs {
            assert_eq!(
                scan_number(input),
                Err(ParseError::InvalidValue),
                "input {:?}",
                core::str::from_utf8(input)
            );
        }
    }

    #[test]
    fn test_nonzero_mantissa_tracking() {
        assert!(!scan_number(b"0.000e-5").unwrap().nonzero_mantissa);
        assert!(!scan_number(b"-0e9").unwrap().nonzero_mantissa);
        assert!(scan_number(b"0.001").unwrap().nonzero_mantissa);
        assert!(scan_number(b"10").unwrap().nonzero_mantissa);
    }

    #[test]
    fn test_parse_number_advances_cursor() {
        let mut cursor = Cursor::new(b"-2.5e2 ");
        assert_eq!(parse_number(&mut cursor), Ok(Value::Number(-250.0)));
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_parse_number_failure_keeps_cursor() {
        let mut cursor = Cursor::new(b"1e");
        assert_eq!(parse_number(&mut cursor), Err(ParseError::InvalidValue));
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new(b"-1e400");
        assert_eq!(parse_number(&mut cursor), Err(ParseError::NumberTooBig));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    #[cfg(not(feature = "underflow-error"))]
    fn test_underflow_is_silent() {
        let mut cursor = Cursor::new(b"1e-10000");
        assert_eq!(parse_number(&mut cursor), Ok(Value::Number(0.0)));
    }

    #[test]
    #[cfg(feature = "underflow-error")]
    fn test_underflow_is_rejected() {
        let mut cursor = Cursor::new(b"1e-10000");
        assert_eq!(parse_number(&mut cursor), Err(ParseError::NumberTooSmall));
        assert_eq!(cursor.position(), 0);

        // Zero itself is not an underflow
        let mut cursor = Cursor::new(b"0.0e-10000");
        assert_eq!(parse_number(&mut cursor), Ok(Value::Number(0.0)));
    }
}
