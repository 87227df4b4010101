// SPDX-License-Identifier: Apache-2.0

//! A minimal JSON literal parser.
//!
//! Parses a complete in-memory buffer holding exactly one of `null`, `true`,
//! `false` or a JSON number into a [`Value`].
//!
//! ```
//! use leptjson::{parse, ParseError, ValueType};
//!
//! let value = parse(" -1.5E-3 ").unwrap();
//! assert_eq!(value.get_type(), ValueType::Number);
//! assert_eq!(value.get_number(), -1.5e-3);
//!
//! assert_eq!(parse("true false"), Err(ParseError::RootNotSingular));
//! ```

#![cfg_attr(not(test), no_std)]

mod cursor;

mod literal;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::{parse, parse_into, parse_slice};

mod value;
pub use value::{Value, ValueType};
