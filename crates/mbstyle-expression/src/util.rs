//! Value helpers shared by the operator families.

use crate::error::{ExprError, Result};
use crate::types::ValueKind;
use serde_json::{Number, Value};
use std::cmp::Ordering;

// -------------------------------------------------------------- Equality

/// Typed equality used by `==`, `!=` and `match`.
///
/// Values of different kinds are never equal, so `true` and `"true"` differ
/// and `null` only equals `null`. Numbers compare numerically (`1 == 1.0`);
/// arrays and objects compare element-wise with the same rule.
pub fn typed_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| typed_equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| typed_equals(x, y)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// -------------------------------------------------------------- Ordering

/// Orders two numbers or two strings. Any other pairing is a type mismatch.
pub fn compare(operator: &str, a: &Value, b: &Value) -> Result<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y)
                .ok_or_else(|| ExprError::type_mismatch(operator, "comparable numbers", a))
        }
        (Value::String(x), Value::String(y)) => Ok(x.cmp(y)),
        (Value::Number(_), _) => Err(ExprError::type_mismatch(operator, "two numbers", b)),
        (Value::String(_), _) => Err(ExprError::type_mismatch(operator, "two strings", b)),
        _ => Err(ExprError::type_mismatch(operator, "a number or string", a)),
    }
}

// -------------------------------------------------------------- Coercion

pub fn expect_bool(operator: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| ExprError::type_mismatch(operator, "a boolean", value))
}

pub fn expect_str<'v>(operator: &str, value: &'v Value) -> Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| ExprError::type_mismatch(operator, "a string", value))
}

pub fn expect_f64(operator: &str, value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| ExprError::type_mismatch(operator, "a number", value))
}

/// Converts an integer-valued number into an array index for an array of
/// length `len`. Integers outside the `i64` range saturate and so are
/// reported as out of range.
pub fn to_index(operator: &str, value: &Value, len: usize) -> Result<usize> {
    let index = match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i,
            (None, Some(_), _) => i64::MAX,
            // `as` saturates at the i64 bounds.
            (None, None, Some(f)) if f.is_finite() && f.fract() == 0.0 => f as i64,
            _ => return Err(ExprError::type_mismatch(operator, "an integer index", value)),
        },
        _ => return Err(ExprError::type_mismatch(operator, "an integer index", value)),
    };
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(ExprError::IndexOutOfRange { index, len }),
    }
}

pub fn is_number_or_string(value: &Value) -> bool {
    matches!(ValueKind::of(value), ValueKind::Number | ValueKind::String)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_equals_only_null() {
        assert!(typed_equals(&json!(null), &json!(null)));
        assert!(!typed_equals(&json!(null), &json!(0)));
        assert!(!typed_equals(&json!(""), &json!(null)));
    }

    #[test]
    fn test_cross_kind_never_equal() {
        assert!(!typed_equals(&json!(true), &json!("true")));
        assert!(!typed_equals(&json!(1), &json!("1")));
        assert!(!typed_equals(&json!(0), &json!(false)));
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert!(typed_equals(&json!(1), &json!(1.0)));
        assert!(typed_equals(&json!(-3), &json!(-3.0)));
        assert!(!typed_equals(&json!(1), &json!(1.5)));
    }

    #[test]
    fn test_nested_equality() {
        assert!(typed_equals(&json!([1, {"a": 2}]), &json!([1.0, {"a": 2.0}])));
        assert!(!typed_equals(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(!typed_equals(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare("<", &json!(1), &json!(2)).unwrap(), Ordering::Less);
        assert_eq!(compare("<", &json!("b"), &json!("a")).unwrap(), Ordering::Greater);
        assert!(matches!(
            compare("<", &json!(1), &json!("a")),
            Err(ExprError::TypeMismatch { found: ValueKind::String, .. })
        ));
        assert!(matches!(
            compare("<", &json!(true), &json!(false)),
            Err(ExprError::TypeMismatch { found: ValueKind::Boolean, .. })
        ));
    }

    #[test]
    fn test_to_index() {
        assert_eq!(to_index("at", &json!(1), 3).unwrap(), 1);
        assert_eq!(to_index("at", &json!(2.0), 3).unwrap(), 2);
        assert_eq!(
            to_index("at", &json!(3), 3).unwrap_err(),
            ExprError::IndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(
            to_index("at", &json!(-1), 3).unwrap_err(),
            ExprError::IndexOutOfRange { index: -1, len: 3 }
        );
        assert!(matches!(
            to_index("at", &json!(1.5), 3),
            Err(ExprError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_huge_indices_are_out_of_range() {
        assert_eq!(
            to_index("at", &json!(1e19), 2).unwrap_err(),
            ExprError::IndexOutOfRange { index: i64::MAX, len: 2 }
        );
        assert_eq!(
            to_index("at", &json!(-1e19), 2).unwrap_err(),
            ExprError::IndexOutOfRange { index: i64::MIN, len: 2 }
        );
        assert_eq!(
            to_index("at", &json!(u64::MAX), 2).unwrap_err(),
            ExprError::IndexOutOfRange { index: i64::MAX, len: 2 }
        );
    }
}
