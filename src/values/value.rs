// qenmlrs/src/values/value.rs

//! The closed union of raw value kinds a namelist variable may carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw, pre-coercion value as supplied by the caller.
///
/// Exactly the five kinds a Quantum ESPRESSO namelist entry may be written
/// with; anything else is unrepresentable. Coercion to the schema-declared
/// type happens lazily when the owning variable's value is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// Integer value
    Integer(i64),

    /// Real (floating-point) value
    Real(f64),

    /// Logical (boolean) value
    Logical(bool),

    /// Character string
    Character(String),

    /// Sequence of values
    List(Vec<InputValue>),
}

impl InputValue {
    /// Get the kind name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            InputValue::Integer(_) => "integer",
            InputValue::Real(_) => "real",
            InputValue::Logical(_) => "logical",
            InputValue::Character(_) => "character",
            InputValue::List(_) => "list",
        }
    }

    /// Check if this value is a numeric kind.
    pub fn is_numeric(&self) -> bool {
        matches!(self, InputValue::Integer(_) | InputValue::Real(_))
    }

    /// Check if this value is a sequence.
    pub fn is_list(&self) -> bool {
        matches!(self, InputValue::List(_))
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Integer(i) => write!(f, "{}", i),
            InputValue::Real(r) => write!(f, "{}", r),
            InputValue::Logical(true) => write!(f, ".true."),
            InputValue::Logical(false) => write!(f, ".false."),
            InputValue::Character(s) => write!(f, "{}", s),
            InputValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}
