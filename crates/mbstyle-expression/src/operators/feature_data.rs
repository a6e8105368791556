use crate::error::{ExprError, Result};
use crate::eval_ctx::{FEATURE_ID, GEOMETRY_TYPE, PROPERTIES};
use crate::node::Node;
use crate::types::{assert_arity, Arity};
use serde_json::Value;

/// `geometry-type`, `id` and `properties` read feature-level globals.
pub fn compile(name: &str, operands: &[Value]) -> Result<Node> {
    let global = match name {
        "geometry-type" => GEOMETRY_TYPE,
        "id" => FEATURE_ID,
        "properties" => PROPERTIES,
        _ => return Err(ExprError::UnknownOperator(name.to_string())),
    };
    assert_arity(name, Arity::Fixed(0), operands.len())?;
    Ok(Node::Global(global.to_string()))
}
