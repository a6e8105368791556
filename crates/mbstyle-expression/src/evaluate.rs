//! Evaluation of compiled trees.

use crate::error::Result;
use crate::eval_ctx::EvaluationContext;
use crate::node::Node;
use crate::operators::{color, decision, lookup, types};
use crate::types::Evaluable;
use serde_json::Value;

impl Evaluable for Node {
    fn evaluate(&self, ctx: &dyn EvaluationContext) -> Result<Value> {
        match self {
            Node::Literal(value) => Ok(value.clone()),
            Node::Property(name) => Ok(ctx.resolve_property(name).unwrap_or(Value::Null)),
            Node::Global(name) => Ok(ctx.resolve_global(name).unwrap_or(Value::Null)),

            Node::Not(operand) => decision::not_eval(operand, ctx),
            Node::Equals { lhs, rhs, negate } => decision::equals_eval(lhs, rhs, *negate, ctx),
            Node::Compare { op, lhs, rhs } => decision::compare_eval(*op, lhs, rhs, ctx),
            Node::All(operands) => decision::all_eval(operands, ctx),
            Node::Any(operands) => decision::any_eval(operands, ctx),
            Node::Case { branches, default } => decision::case_eval(branches, default.as_deref(), ctx),
            Node::Coalesce(operands) => decision::coalesce_eval(operands, ctx),
            Node::Match {
                input,
                arms,
                default,
            } => decision::match_eval(input, arms, default.as_deref(), ctx),

            Node::At { index, array } => lookup::at_eval(index, array, ctx),
            Node::Get { name, object } => lookup::get_eval(name, object.as_deref(), ctx),
            Node::Has { name, object } => lookup::has_eval(name, object.as_deref(), ctx),
            Node::Length(operand) => lookup::length_eval(operand, ctx),

            Node::Round(operand) => color::round_eval(operand, ctx),
            Node::ToHex(operand) => color::to_hex_eval(operand, ctx),
            Node::Concat(parts) => color::concat_eval(parts, ctx),

            Node::ToNumber(operands) => types::to_number_eval(operands, ctx),
            Node::ArrayOf(operands) => types::array_eval(operands, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval_ctx::FeatureContext;
    use serde_json::json;

    #[test]
    fn test_property_values_are_terminal() {
        let ctx = FeatureContext::from_json(json!({
            "expr": ["get", "name"],
            "name": "Elm",
        }));
        let node = Node::Coalesce(vec![Node::Property("expr".into())]);
        assert_eq!(node.evaluate(&ctx).unwrap(), json!(["get", "name"]));
    }

    #[test]
    fn test_missing_lookups_are_null() {
        assert_eq!(Node::Property("a".into()).evaluate(&()).unwrap(), json!(null));
        assert_eq!(Node::Global("zoom".into()).evaluate(&()).unwrap(), json!(null));
    }
}
