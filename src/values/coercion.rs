// qenmlrs/src/values/coercion.rs

//! Coercion of raw input values to their schema-declared scalar types.
//!
//! String forms follow Fortran conventions: reals accept the `d`-exponent
//! notation (`1.0d-8`), logicals accept the `.true.`/`.t.` literal family.

use serde::Serialize;
use std::fmt;

use super::value::InputValue;
use crate::error::{QenmlError, Result};

/// A value after coercion to its schema-declared type.
///
/// The array variant is the indexed view over a fixed-length float parameter:
/// unset slots carry the null-marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    /// Integer scalar
    Integer(i64),

    /// Real scalar
    Real(f64),

    /// Logical scalar
    Logical(bool),

    /// Character string
    Character(String),

    /// Fixed-length float array; `None` marks an unset slot
    RealArray(Vec<Option<f64>>),
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(i) => write!(f, "{}", i),
            TypedValue::Real(r) => write!(f, "{}", r),
            TypedValue::Logical(true) => write!(f, ".true."),
            TypedValue::Logical(false) => write!(f, ".false."),
            TypedValue::Character(s) => write!(f, "'{}'", s),
            TypedValue::RealArray(slots) => {
                for (i, slot) in slots.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if let Some(value) = slot {
                        write!(f, "{}", value)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Coerce a raw value to an integer, truncating reals toward zero.
pub fn coerce_integer(name: &str, value: &InputValue) -> Result<i64> {
    match value {
        InputValue::Integer(i) => Ok(*i),
        InputValue::Real(f)
            if f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 =>
        {
            Ok(f.trunc() as i64)
        }
        InputValue::Logical(b) => Ok(*b as i64),
        InputValue::Character(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| coercion_error(name, value, "integer")),
        _ => Err(coercion_error(name, value, "integer")),
    }
}

/// Coerce a raw value to a real.
pub fn coerce_real(name: &str, value: &InputValue) -> Result<f64> {
    match value {
        InputValue::Real(f) => Ok(*f),
        InputValue::Integer(i) => Ok(*i as f64),
        InputValue::Logical(b) => Ok(*b as i64 as f64),
        InputValue::Character(s) => {
            parse_real_literal(s).ok_or_else(|| coercion_error(name, value, "real"))
        }
        _ => Err(coercion_error(name, value, "real")),
    }
}

/// Coerce a raw value to a logical.
pub fn coerce_logical(name: &str, value: &InputValue) -> Result<bool> {
    match value {
        InputValue::Logical(b) => Ok(*b),
        InputValue::Character(s) => {
            parse_logical_literal(s).ok_or_else(|| coercion_error(name, value, "logical"))
        }
        _ => Err(coercion_error(name, value, "logical")),
    }
}

/// Coerce a raw value to a character string.
pub fn coerce_character(name: &str, value: &InputValue) -> Result<String> {
    match value {
        InputValue::Character(s) => Ok(s.clone()),
        InputValue::Integer(_) | InputValue::Real(_) | InputValue::Logical(_) => {
            Ok(value.to_string())
        }
        InputValue::List(_) => Err(coercion_error(name, value, "character")),
    }
}

fn coercion_error(name: &str, value: &InputValue, expected: &str) -> QenmlError {
    QenmlError::Coercion {
        name: name.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// Parse a real literal, normalizing Fortran `d`/`D` exponent markers.
fn parse_real_literal(s: &str) -> Option<f64> {
    let trimmed = s.trim();

    let normalized: String;
    let candidate = if let Some(pos) = trimmed.find(|c| c == 'd' || c == 'D') {
        let mut owned = trimmed.to_string();
        owned.replace_range(pos..pos + 1, "e");
        normalized = owned;
        &normalized
    } else {
        trimmed
    };

    candidate.parse::<f64>().ok()
}

/// Parse a Fortran logical literal.
fn parse_logical_literal(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        ".true." | ".t." | "true" | "t" => Some(true),
        ".false." | ".f." | "false" | "f" => Some(false),
        _ => None,
    }
}
