use crate::operators::OperatorFamily;
use crate::types::{Arity, ValueKind};
use thiserror::Error;

/// Failures raised while compiling or evaluating an expression.
///
/// Structural problems (shape, arity, unknown names, literal labels) surface
/// from `compile`; problems that depend on run-time values surface from
/// `evaluate`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Malformed expression: {reason}")]
    MalformedExpression { reason: String },

    #[error("Unknown expression \"{0}\".")]
    UnknownOperator(String),

    #[error("\"{operator}\" operator expects {expected} operands, found {found}.")]
    Arity {
        operator: String,
        expected: Arity,
        found: usize,
    },

    #[error("\"{operator}\" operator expects {expected}, found {found}.")]
    TypeMismatch {
        operator: String,
        expected: &'static str,
        found: ValueKind,
    },

    #[error("\"{operator}\" had no condition that evaluated to true and no default.")]
    NoMatchingBranch { operator: String },

    #[error("\"{operator}\" had no matching label and no default.")]
    NoMatchingLabel { operator: String },

    #[error("\"match\" requires a number or string input, found {found}.")]
    InvalidMatchInput { found: ValueKind },

    #[error("Index {index} is out of range for an array of length {len}.")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("\"{operator}\" operator expects an array, found {found}.")]
    NotAnArray { operator: String, found: ValueKind },

    #[error("\"{operator}\" operator expects an object to look up in, found {found}.")]
    InvalidLookupTarget { operator: String, found: ValueKind },

    #[error("\"length\" operator expects a string or array, found {found}.")]
    UnsupportedLengthTarget { found: ValueKind },

    #[error("\"{operator}\" is a {family} expression which is not supported.")]
    UnsupportedOperator {
        operator: String,
        family: OperatorFamily,
    },

    #[error("Expressions are nested more than {limit} levels deep.")]
    NestingLimit { limit: usize },
}

pub type Result<T> = std::result::Result<T, ExprError>;

impl ExprError {
    pub(crate) fn type_mismatch(operator: &str, expected: &'static str, found: &serde_json::Value) -> Self {
        ExprError::TypeMismatch {
            operator: operator.to_string(),
            expected,
            found: ValueKind::of(found),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ExprError::MalformedExpression {
            reason: reason.into(),
        }
    }
}
