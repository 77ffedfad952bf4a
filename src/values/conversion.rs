// qenmlrs/src/values/conversion.rs

//! Conversions from common Rust types into InputValue.

use super::value::InputValue;

impl From<i32> for InputValue {
    fn from(value: i32) -> Self {
        InputValue::Integer(value as i64)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        InputValue::Integer(value)
    }
}

impl From<f32> for InputValue {
    fn from(value: f32) -> Self {
        InputValue::Real(value as f64)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Real(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Logical(value)
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Character(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Character(value.to_string())
    }
}

impl From<Vec<InputValue>> for InputValue {
    fn from(value: Vec<InputValue>) -> Self {
        InputValue::List(value)
    }
}

impl From<Vec<i64>> for InputValue {
    fn from(values: Vec<i64>) -> Self {
        InputValue::List(values.into_iter().map(InputValue::from).collect())
    }
}

impl From<Vec<f64>> for InputValue {
    fn from(values: Vec<f64>) -> Self {
        InputValue::List(values.into_iter().map(InputValue::from).collect())
    }
}

impl From<Vec<bool>> for InputValue {
    fn from(values: Vec<bool>) -> Self {
        InputValue::List(values.into_iter().map(InputValue::from).collect())
    }
}

impl From<Vec<String>> for InputValue {
    fn from(values: Vec<String>) -> Self {
        InputValue::List(values.into_iter().map(InputValue::from).collect())
    }
}

impl From<Vec<&str>> for InputValue {
    fn from(values: Vec<&str>) -> Self {
        InputValue::List(values.into_iter().map(InputValue::from).collect())
    }
}
