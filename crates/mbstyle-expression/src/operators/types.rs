//! Type operators: `literal`, `to-number` and `array`.

use crate::compile::Compiler;
use crate::error::{ExprError, Result};
use crate::eval_ctx::EvaluationContext;
use crate::node::Node;
use crate::types::{assert_arity, Arity, Evaluable, ValueKind};
use serde_json::{Number, Value};

/// `["literal", value]` yields `value` untouched, even when it is an array
/// whose head names an operator.
pub fn compile(compiler: &Compiler, name: &str, operands: &[Value]) -> Result<Node> {
    match name {
        "literal" => {
            assert_arity(name, Arity::Fixed(1), operands.len())?;
            Ok(Node::Literal(operands[0].clone()))
        }
        "to-number" | "array" => {
            assert_arity(name, Arity::AtLeast(1), operands.len())?;
            let nodes = operands
                .iter()
                .map(|operand| compiler.compile_operand(operand))
                .collect::<Result<Vec<_>>>()?;
            Ok(if name == "to-number" {
                Node::ToNumber(nodes)
            } else {
                Node::ArrayOf(nodes)
            })
        }
        _ => Err(ExprError::UnknownOperator(name.to_string())),
    }
}

/// Converts a single value: `null` and `false` are 0, `true` is 1, numbers
/// pass through and strings are parsed. Anything else does not convert.
fn convert(value: &Value) -> Option<Value> {
    match value {
        Value::Null | Value::Bool(false) => Some(Value::from(0)),
        Value::Bool(true) => Some(Value::from(1)),
        Value::Number(_) => Some(value.clone()),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn to_number_eval(operands: &[Node], ctx: &dyn EvaluationContext) -> Result<Value> {
    let mut last = ValueKind::Null;
    for operand in operands {
        let value = operand.evaluate(ctx)?;
        if let Some(number) = convert(&value) {
            return Ok(number);
        }
        last = ValueKind::of(&value);
    }
    Err(ExprError::TypeMismatch {
        operator: "to-number".to_string(),
        expected: "a value convertible to a number",
        found: last,
    })
}

pub(crate) fn array_eval(operands: &[Node], ctx: &dyn EvaluationContext) -> Result<Value> {
    let mut last = ValueKind::Null;
    for operand in operands {
        let value = operand.evaluate(ctx)?;
        if value.is_array() {
            return Ok(value);
        }
        last = ValueKind::of(&value);
    }
    Err(ExprError::NotAnArray {
        operator: "array".to_string(),
        found: last,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert() {
        assert_eq!(convert(&json!(null)), Some(json!(0)));
        assert_eq!(convert(&json!(false)), Some(json!(0)));
        assert_eq!(convert(&json!(true)), Some(json!(1)));
        assert_eq!(convert(&json!(7)), Some(json!(7)));
        assert_eq!(convert(&json!(" 2.5 ")), Some(json!(2.5)));
        assert_eq!(convert(&json!("1e3")), Some(json!(1000.0)));
        assert_eq!(convert(&json!("abc")), None);
        assert_eq!(convert(&json!("NaN")), None);
        assert_eq!(convert(&json!([1])), None);
        assert_eq!(convert(&json!({"a": 1})), None);
    }
}
