// qenmlrs/src/values/tests.rs

//! Tests for raw values and coercion.

use super::*;
use crate::error::QenmlError;

#[test]
fn test_from_conversions() {
    assert_eq!(InputValue::from(42i32), InputValue::Integer(42));
    assert_eq!(InputValue::from(20.0f64), InputValue::Real(20.0));
    assert_eq!(InputValue::from(true), InputValue::Logical(true));
    assert_eq!(
        InputValue::from("scf"),
        InputValue::Character("scf".to_string())
    );
    assert_eq!(
        InputValue::from(vec![1.0, 2.0]),
        InputValue::List(vec![InputValue::Real(1.0), InputValue::Real(2.0)])
    );
}

#[test]
fn test_type_names() {
    assert_eq!(InputValue::Integer(1).type_name(), "integer");
    assert_eq!(InputValue::Real(1.0).type_name(), "real");
    assert_eq!(InputValue::Logical(false).type_name(), "logical");
    assert_eq!(InputValue::Character("x".into()).type_name(), "character");
    assert_eq!(InputValue::List(vec![]).type_name(), "list");

    assert!(InputValue::Integer(1).is_numeric());
    assert!(!InputValue::Character("1".into()).is_numeric());
    assert!(InputValue::List(vec![]).is_list());
}

#[test]
fn test_display() {
    assert_eq!(InputValue::Logical(true).to_string(), ".true.");
    assert_eq!(InputValue::Integer(-3).to_string(), "-3");
    assert_eq!(
        InputValue::List(vec![InputValue::Integer(1), InputValue::Real(2.5)]).to_string(),
        "1, 2.5"
    );
}

#[test]
fn test_coerce_integer() {
    assert_eq!(coerce_integer("n", &InputValue::Integer(7)).unwrap(), 7);
    assert_eq!(coerce_integer("n", &InputValue::Real(20.9)).unwrap(), 20);
    assert_eq!(coerce_integer("n", &InputValue::Real(-20.9)).unwrap(), -20);
    assert_eq!(
        coerce_integer("n", &InputValue::Logical(true)).unwrap(),
        1
    );
    assert_eq!(
        coerce_integer("n", &InputValue::Character(" 42 ".into())).unwrap(),
        42
    );

    assert!(coerce_integer("n", &InputValue::Character("20.5".into())).is_err());
    assert!(coerce_integer("n", &InputValue::Real(f64::INFINITY)).is_err());
    assert!(coerce_integer("n", &InputValue::List(vec![])).is_err());
}

#[test]
fn test_coerce_real() {
    assert_eq!(coerce_real("x", &InputValue::Real(2.5)).unwrap(), 2.5);
    assert_eq!(coerce_real("x", &InputValue::Integer(20)).unwrap(), 20.0);
    assert_eq!(coerce_real("x", &InputValue::Logical(true)).unwrap(), 1.0);
    assert_eq!(
        coerce_real("x", &InputValue::Character("20".into())).unwrap(),
        20.0
    );
    assert_eq!(
        coerce_real("x", &InputValue::Character("1.5e-2".into())).unwrap(),
        1.5e-2
    );
    // Fortran double precision exponent marker
    assert_eq!(
        coerce_real("x", &InputValue::Character("1.0d-8".into())).unwrap(),
        1.0e-8
    );
    assert_eq!(
        coerce_real("x", &InputValue::Character("-2.5D+3".into())).unwrap(),
        -2.5e3
    );

    assert!(coerce_real("x", &InputValue::Character("fast".into())).is_err());
    assert!(coerce_real("x", &InputValue::List(vec![])).is_err());
}

#[test]
fn test_coerce_logical() {
    assert!(coerce_logical("l", &InputValue::Logical(true)).unwrap());
    assert!(coerce_logical("l", &InputValue::Character(".true.".into())).unwrap());
    assert!(coerce_logical("l", &InputValue::Character(".T.".into())).unwrap());
    assert!(!coerce_logical("l", &InputValue::Character("false".into())).unwrap());

    assert!(coerce_logical("l", &InputValue::Integer(1)).is_err());
    assert!(coerce_logical("l", &InputValue::Character("yes".into())).is_err());
}

#[test]
fn test_coerce_character() {
    assert_eq!(
        coerce_character("s", &InputValue::Character("scf".into())).unwrap(),
        "scf"
    );
    assert_eq!(
        coerce_character("s", &InputValue::Integer(0)).unwrap(),
        "0"
    );
    assert_eq!(
        coerce_character("s", &InputValue::Logical(false)).unwrap(),
        ".false."
    );

    let err = coerce_character("s", &InputValue::List(vec![])).unwrap_err();
    assert_eq!(err.category(), "coercion");
    match err {
        QenmlError::Coercion { name, expected, .. } => {
            assert_eq!(name, "s");
            assert_eq!(expected, "character");
        }
        _ => panic!("Wrong error type"),
    }
}
