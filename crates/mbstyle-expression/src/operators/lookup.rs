//! Lookup operators: `at`, `get`, `has`, `length`.
//!
//! The one-operand forms of `get` and `has` defer to the evaluation context;
//! the two-operand forms look up directly in an object value.

use crate::compile::Compiler;
use crate::error::{ExprError, Result};
use crate::eval_ctx::EvaluationContext;
use crate::node::Node;
use crate::types::{assert_arity, Arity, Evaluable, ValueKind};
use crate::util;
use serde_json::{Map, Value};

pub fn compile(compiler: &Compiler, name: &str, operands: &[Value]) -> Result<Node> {
    match name {
        "at" => {
            assert_arity(name, Arity::Fixed(2), operands.len())?;
            Ok(Node::At {
                index: compiler.compile_operand(&operands[0])?.boxed(),
                array: compiler.compile_operand(&operands[1])?.boxed(),
            })
        }
        "get" => {
            assert_arity(name, Arity::Range(1, 2), operands.len())?;
            let (key, object) = compile_key_and_object(compiler, name, operands)?;
            Ok(match (key, object) {
                (Node::Literal(Value::String(property)), None) => Node::Property(property),
                (key, object) => Node::Get {
                    name: key.boxed(),
                    object,
                },
            })
        }
        "has" => {
            assert_arity(name, Arity::Range(1, 2), operands.len())?;
            let (key, object) = compile_key_and_object(compiler, name, operands)?;
            Ok(Node::Has {
                name: key.boxed(),
                object,
            })
        }
        "length" => {
            assert_arity(name, Arity::Fixed(1), operands.len())?;
            Ok(Node::Length(compiler.compile_operand(&operands[0])?.boxed()))
        }
        _ => Err(ExprError::UnknownOperator(name.to_string())),
    }
}

fn compile_key_and_object(
    compiler: &Compiler,
    operator: &str,
    operands: &[Value],
) -> Result<(Node, Option<Box<Node>>)> {
    let key = compiler.compile_operand(&operands[0])?;
    if let Some(value) = key.as_literal() {
        util::expect_str(operator, value)?;
    }
    let object = operands
        .get(1)
        .map(|object| compiler.compile_operand(object).map(Node::boxed))
        .transpose()?;
    Ok((key, object))
}

fn eval_object(operator: &str, object: &Node, ctx: &dyn EvaluationContext) -> Result<Map<String, Value>> {
    match object.evaluate(ctx)? {
        Value::Object(map) => Ok(map),
        other => Err(ExprError::InvalidLookupTarget {
            operator: operator.to_string(),
            found: ValueKind::of(&other),
        }),
    }
}

pub(crate) fn at_eval(index: &Node, array: &Node, ctx: &dyn EvaluationContext) -> Result<Value> {
    let index = index.evaluate(ctx)?;
    let mut items = match array.evaluate(ctx)? {
        Value::Array(items) => items,
        other => {
            return Err(ExprError::NotAnArray {
                operator: "at".to_string(),
                found: ValueKind::of(&other),
            })
        }
    };
    let i = util::to_index("at", &index, items.len())?;
    Ok(items.swap_remove(i))
}

pub(crate) fn get_eval(
    name: &Node,
    object: Option<&Node>,
    ctx: &dyn EvaluationContext,
) -> Result<Value> {
    let key = name.evaluate(ctx)?;
    let key = util::expect_str("get", &key)?;
    match object {
        None => Ok(ctx.resolve_property(key).unwrap_or(Value::Null)),
        Some(object) => {
            let mut map = eval_object("get", object, ctx)?;
            Ok(map.remove(key).unwrap_or(Value::Null))
        }
    }
}

pub(crate) fn has_eval(
    name: &Node,
    object: Option<&Node>,
    ctx: &dyn EvaluationContext,
) -> Result<Value> {
    let key = name.evaluate(ctx)?;
    let key = util::expect_str("has", &key)?;
    let found = match object {
        None => ctx.resolve_property(key).is_some(),
        Some(object) => eval_object("has", object, ctx)?.contains_key(key),
    };
    Ok(Value::Bool(found))
}

pub(crate) fn length_eval(operand: &Node, ctx: &dyn EvaluationContext) -> Result<Value> {
    match operand.evaluate(ctx)? {
        Value::String(s) => Ok(Value::from(s.chars().count())),
        Value::Array(items) => Ok(Value::from(items.len())),
        other => Err(ExprError::UnsupportedLengthTarget {
            found: ValueKind::of(&other),
        }),
    }
}
