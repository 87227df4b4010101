// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while parsing a value.
///
/// These are data errors: every one of them is a normal, recoverable outcome
/// of feeding arbitrary text to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or held only whitespace.
    ExpectValue,
    /// A literal keyword or a number was malformed.
    InvalidValue,
    /// A valid value was followed by more non-whitespace content.
    RootNotSingular,
    /// The number is well formed but overflows an `f64`.
    NumberTooBig,
    /// The number is well formed but non-zero digits underflow to `0.0`.
    #[cfg(feature = "underflow-error")]
    NumberTooSmall,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::NumberTooBig => "number too big",
            #[cfg(feature = "underflow-error")]
            ParseError::NumberTooSmall => "number too small",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}
