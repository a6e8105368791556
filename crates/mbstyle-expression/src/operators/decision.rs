//! Decision operators: negation, comparison, boolean logic and branching.

use crate::compile::Compiler;
use crate::error::{ExprError, Result};
use crate::eval_ctx::EvaluationContext;
use crate::node::{CompareOp, MatchLabel, Node};
use crate::types::{assert_arity, Arity, Evaluable, ValueKind};
use crate::util;
use serde_json::Value;

pub fn compile(compiler: &Compiler, name: &str, operands: &[Value]) -> Result<Node> {
    match name {
        "!" => {
            assert_arity(name, Arity::Fixed(1), operands.len())?;
            Ok(Node::Not(compiler.compile_operand(&operands[0])?.boxed()))
        }
        "==" | "!=" => {
            assert_arity(name, Arity::Fixed(2), operands.len())?;
            Ok(Node::Equals {
                lhs: compiler.compile_operand(&operands[0])?.boxed(),
                rhs: compiler.compile_operand(&operands[1])?.boxed(),
                negate: name == "!=",
            })
        }
        "<" | "<=" | ">" | ">=" => {
            assert_arity(name, Arity::Fixed(2), operands.len())?;
            let op = match name {
                "<" => CompareOp::Less,
                "<=" => CompareOp::LessEqual,
                ">" => CompareOp::Greater,
                _ => CompareOp::GreaterEqual,
            };
            Ok(Node::Compare {
                op,
                lhs: compiler.compile_operand(&operands[0])?.boxed(),
                rhs: compiler.compile_operand(&operands[1])?.boxed(),
            })
        }
        "all" | "any" => {
            assert_arity(name, Arity::AtLeast(1), operands.len())?;
            let nodes = compile_all(compiler, operands)?;
            Ok(if name == "all" {
                Node::All(nodes)
            } else {
                Node::Any(nodes)
            })
        }
        "case" => compile_case(compiler, operands),
        "coalesce" => {
            assert_arity(name, Arity::AtLeast(1), operands.len())?;
            Ok(Node::Coalesce(compile_all(compiler, operands)?))
        }
        "match" => compile_match(compiler, operands),
        _ => Err(ExprError::UnknownOperator(name.to_string())),
    }
}

fn compile_all(compiler: &Compiler, operands: &[Value]) -> Result<Vec<Node>> {
    operands
        .iter()
        .map(|operand| compiler.compile_operand(operand))
        .collect()
}

/// `["case", condition, output, ...condition, output, default?]`
fn compile_case(compiler: &Compiler, operands: &[Value]) -> Result<Node> {
    assert_arity("case", Arity::AtLeast(2), operands.len())?;
    let mut pairs = operands.chunks_exact(2);
    let branches = pairs
        .by_ref()
        .map(|pair| -> Result<(Node, Node)> {
            Ok((
                compiler.compile_operand(&pair[0])?,
                compiler.compile_operand(&pair[1])?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    let default = match pairs.remainder() {
        [fallback] => Some(compiler.compile_operand(fallback)?.boxed()),
        _ => None,
    };
    Ok(Node::Case { branches, default })
}

/// `["match", input, label, output, ...label, output, default?]`
fn compile_match(compiler: &Compiler, operands: &[Value]) -> Result<Node> {
    assert_arity("match", Arity::AtLeast(3), operands.len())?;
    let input = compiler.compile_operand(&operands[0])?;
    if let Some(value) = input.as_literal() {
        check_match_input(value)?;
    }

    let mut pairs = operands[1..].chunks_exact(2);
    let arms = pairs
        .by_ref()
        .map(|pair| -> Result<(MatchLabel, Node)> {
            Ok((parse_label(&pair[0])?, compiler.compile_operand(&pair[1])?))
        })
        .collect::<Result<Vec<_>>>()?;
    let default = match pairs.remainder() {
        [fallback] => Some(compiler.compile_operand(fallback)?.boxed()),
        _ => None,
    };
    Ok(Node::Match {
        input: input.boxed(),
        arms,
        default,
    })
}

fn parse_label(label: &Value) -> Result<MatchLabel> {
    match label {
        Value::Number(_) | Value::String(_) => Ok(MatchLabel::Single(label.clone())),
        Value::Array(items) => {
            if let Some(bad) = items.iter().find(|item| !util::is_number_or_string(item)) {
                return Err(ExprError::type_mismatch(
                    "match",
                    "number or string label values",
                    bad,
                ));
            }
            Ok(MatchLabel::AnyOf(items.clone()))
        }
        other => Err(ExprError::type_mismatch(
            "match",
            "a number, string or array label",
            other,
        )),
    }
}

fn check_match_input(value: &Value) -> Result<()> {
    if util::is_number_or_string(value) {
        Ok(())
    } else {
        Err(ExprError::InvalidMatchInput {
            found: ValueKind::of(value),
        })
    }
}

impl MatchLabel {
    pub fn matches(&self, input: &Value) -> bool {
        match self {
            MatchLabel::Single(label) => util::typed_equals(label, input),
            MatchLabel::AnyOf(labels) => labels.iter().any(|label| util::typed_equals(label, input)),
        }
    }
}

// ----------------------------------------------------------------- Evaluation

pub(crate) fn not_eval(operand: &Node, ctx: &dyn EvaluationContext) -> Result<Value> {
    let value = operand.evaluate(ctx)?;
    Ok(Value::Bool(!util::expect_bool("!", &value)?))
}

pub(crate) fn equals_eval(
    lhs: &Node,
    rhs: &Node,
    negate: bool,
    ctx: &dyn EvaluationContext,
) -> Result<Value> {
    let left = lhs.evaluate(ctx)?;
    let right = rhs.evaluate(ctx)?;
    Ok(Value::Bool(util::typed_equals(&left, &right) != negate))
}

pub(crate) fn compare_eval(
    op: CompareOp,
    lhs: &Node,
    rhs: &Node,
    ctx: &dyn EvaluationContext,
) -> Result<Value> {
    let left = lhs.evaluate(ctx)?;
    let right = rhs.evaluate(ctx)?;
    let ordering = util::compare(op.symbol(), &left, &right)?;
    Ok(Value::Bool(op.holds(ordering)))
}

pub(crate) fn all_eval(operands: &[Node], ctx: &dyn EvaluationContext) -> Result<Value> {
    for operand in operands {
        if !util::expect_bool("all", &operand.evaluate(ctx)?)? {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

pub(crate) fn any_eval(operands: &[Node], ctx: &dyn EvaluationContext) -> Result<Value> {
    for operand in operands {
        if util::expect_bool("any", &operand.evaluate(ctx)?)? {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

pub(crate) fn case_eval(
    branches: &[(Node, Node)],
    default: Option<&Node>,
    ctx: &dyn EvaluationContext,
) -> Result<Value> {
    for (condition, output) in branches {
        if util::expect_bool("case", &condition.evaluate(ctx)?)? {
            return output.evaluate(ctx);
        }
    }
    match default {
        Some(fallback) => fallback.evaluate(ctx),
        None => Err(ExprError::NoMatchingBranch {
            operator: "case".to_string(),
        }),
    }
}

pub(crate) fn coalesce_eval(operands: &[Node], ctx: &dyn EvaluationContext) -> Result<Value> {
    for operand in operands {
        let value = operand.evaluate(ctx)?;
        if !value.is_null() {
            return Ok(value);
        }
    }
    Ok(Value::Null)
}

pub(crate) fn match_eval(
    input: &Node,
    arms: &[(MatchLabel, Node)],
    default: Option<&Node>,
    ctx: &dyn EvaluationContext,
) -> Result<Value> {
    let value = input.evaluate(ctx)?;
    check_match_input(&value)?;
    if let Some((_, output)) = arms.iter().find(|(label, _)| label.matches(&value)) {
        return output.evaluate(ctx);
    }
    match default {
        Some(fallback) => fallback.evaluate(ctx),
        None => Err(ExprError::NoMatchingLabel {
            operator: "match".to_string(),
        }),
    }
}
