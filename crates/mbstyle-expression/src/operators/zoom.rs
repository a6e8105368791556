use crate::error::{ExprError, Result};
use crate::eval_ctx::ZOOM;
use crate::node::Node;
use crate::types::{assert_arity, Arity};
use serde_json::Value;

/// `["zoom"]` reads the current zoom level from the evaluation context.
pub fn compile(name: &str, operands: &[Value]) -> Result<Node> {
    match name {
        "zoom" => {
            assert_arity(name, Arity::Fixed(0), operands.len())?;
            Ok(Node::Global(ZOOM.to_string()))
        }
        _ => Err(ExprError::UnknownOperator(name.to_string())),
    }
}
