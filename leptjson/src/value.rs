// SPDX-License-Identifier: Apache-2.0

/// The kind of value held by a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    True,
    False,
    Number,
}

/// A parsed value.
///
/// Only the `Number` variant carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// `null`, also the state of a fresh or failed parse.
    #[default]
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A JSON number converted to the nearest `f64`.
    Number(f64),
}

impl Value {
    /// Returns which kind of value this is.
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::True => ValueType::True,
            Value::False => ValueType::False,
            Value::Number(_) => ValueType::Number,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a number. Asking a non-number for its number
    /// is a programming error, not a parse failure.
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("get_number called on a {:?} value", other.get_type()),
        }
    }

    /// Puts the value back into its initial `Null` state.
    pub fn reset(&mut self) {
        *self = Value::Null;
    }
}
