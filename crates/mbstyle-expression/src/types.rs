use crate::error::{ExprError, Result};
use crate::eval_ctx::EvaluationContext;
use serde_json::Value;
use std::fmt;

/// Run-time type of a [`Value`], used by the type-sensitive operators and in
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator arity, counted in operands (the operator name is not included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` operands.
    Fixed(usize),
    /// At least `n` operands.
    AtLeast(usize),
    /// Between `min` and `max` operands, inclusive.
    Range(usize, usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Fixed(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Range(min, max) => (min..=max).contains(&count),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Range(min, max) => write!(f, "between {} and {}", min, max),
        }
    }
}

/// Asserts that an operator received an acceptable number of operands.
pub fn assert_arity(operator: &str, arity: Arity, operands: usize) -> Result<()> {
    if arity.accepts(operands) {
        Ok(())
    } else {
        Err(ExprError::Arity {
            operator: operator.to_string(),
            expected: arity,
            found: operands,
        })
    }
}

/// Anything that can be evaluated against an [`EvaluationContext`].
pub trait Evaluable {
    fn evaluate(&self, ctx: &dyn EvaluationContext) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind_of() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!("a")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([1])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Object);
    }

    #[test]
    fn test_arity_accepts() {
        assert!(Arity::Fixed(2).accepts(2));
        assert!(!Arity::Fixed(2).accepts(1));
        assert!(Arity::AtLeast(1).accepts(5));
        assert!(!Arity::AtLeast(1).accepts(0));
        assert!(Arity::Range(1, 2).accepts(1));
        assert!(Arity::Range(1, 2).accepts(2));
        assert!(!Arity::Range(1, 2).accepts(3));
    }

    #[test]
    fn test_assert_arity_message() {
        let err = assert_arity("<", Arity::Fixed(2), 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"<\" operator expects exactly 2 operands, found 1."
        );
        let err = assert_arity("all", Arity::AtLeast(1), 0).unwrap_err();
        assert!(err.to_string().contains("at least 1"), "got: {}", err);
    }
}
