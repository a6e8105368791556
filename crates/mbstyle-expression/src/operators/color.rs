//! Colour operators.
//!
//! `rgb` compiles into `Concat["#", ToHex(Round(r)), ToHex(Round(g)), ToHex(Round(b))]`.
//! `rgba` and `to-rgba` are recognised but not supported.

use crate::compile::Compiler;
use crate::error::{ExprError, Result};
use crate::eval_ctx::EvaluationContext;
use crate::node::Node;
use crate::operators::OperatorFamily;
use crate::types::{assert_arity, Arity, Evaluable};
use crate::util;
use serde_json::Value;

pub fn compile(compiler: &Compiler, name: &str, operands: &[Value]) -> Result<Node> {
    match name {
        "rgb" => {
            assert_arity(name, Arity::Fixed(3), operands.len())?;
            let mut parts = vec![Node::literal("#")];
            for channel in operands {
                let channel = compiler.compile_operand(channel)?;
                parts.push(Node::ToHex(Node::Round(channel.boxed()).boxed()));
            }
            Ok(Node::Concat(parts))
        }
        "rgba" | "to-rgba" => Err(ExprError::UnsupportedOperator {
            operator: name.to_string(),
            family: OperatorFamily::Color,
        }),
        _ => Err(ExprError::UnknownOperator(name.to_string())),
    }
}

pub(crate) fn round_eval(operand: &Node, ctx: &dyn EvaluationContext) -> Result<Value> {
    let channel = util::expect_f64("rgb", &operand.evaluate(ctx)?)?;
    let channel = channel.round().clamp(0.0, 255.0) as u64;
    Ok(Value::from(channel))
}

pub(crate) fn to_hex_eval(operand: &Node, ctx: &dyn EvaluationContext) -> Result<Value> {
    let value = operand.evaluate(ctx)?;
    match value.as_u64() {
        Some(byte) if byte <= 0xff => Ok(Value::String(format!("{:02x}", byte))),
        _ => Err(ExprError::type_mismatch("rgb", "a channel between 0 and 255", &value)),
    }
}

pub(crate) fn concat_eval(parts: &[Node], ctx: &dyn EvaluationContext) -> Result<Value> {
    let mut out = String::new();
    for part in parts {
        let value = part.evaluate(ctx)?;
        out.push_str(util::expect_str("rgb", &value)?);
    }
    Ok(Value::String(out))
}
