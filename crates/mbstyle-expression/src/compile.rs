//! The compile entry points and operator dispatcher.

use crate::error::{ExprError, Result};
use crate::node::Node;
use crate::operators::{self, OperatorFamily};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, Span};

/// Default bound on how deeply expressions may nest inside one another.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for [`Compiler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Maximum number of expressions nested below the root one.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompileOptions {
    /// Reads options from a host configuration value. Missing fields take
    /// their defaults.
    pub fn from_json(config: &Value) -> std::result::Result<Self, serde_json::Error> {
        CompileOptions::deserialize(config)
    }
}

/// Compiles expression sources into [`Node`] trees.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
    depth: usize,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Compiler { options, depth: 0 }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles an expression source, `[operator, ...operands]`.
    #[instrument(level = "trace", skip_all, fields(operator = tracing::field::Empty, depth = self.depth))]
    pub fn compile(&self, source: &Value) -> Result<Node> {
        let (name, operands) = split_source(source)?;
        Span::current().record("operator", name);

        let family = OperatorFamily::of(name).ok_or_else(|| {
            debug!(operator = name, "unknown operator");
            ExprError::UnknownOperator(name.to_string())
        })?;
        debug!(operator = name, %family, operands = operands.len(), "compiling expression");

        match family {
            OperatorFamily::Color => operators::color::compile(self, name, operands),
            OperatorFamily::Decision => operators::decision::compile(self, name, operands),
            OperatorFamily::FeatureData => operators::feature_data::compile(name, operands),
            OperatorFamily::Lookup => operators::lookup::compile(self, name, operands),
            OperatorFamily::Types => operators::types::compile(self, name, operands),
            OperatorFamily::Zoom => operators::zoom::compile(name, operands),
            OperatorFamily::Heatmap
            | OperatorFamily::Math
            | OperatorFamily::Ramp
            | OperatorFamily::String
            | OperatorFamily::VariableBinding => {
                debug!(operator = name, %family, "operator family not supported");
                Err(ExprError::UnsupportedOperator {
                    operator: name.to_string(),
                    family,
                })
            }
        }
    }

    /// Compiles an operand: nested expressions are compiled, everything else
    /// (scalars, objects, literal arrays) becomes a literal.
    pub(crate) fn compile_operand(&self, operand: &Value) -> Result<Node> {
        if is_expression(operand) {
            self.nested()?.compile(operand)
        } else {
            Ok(Node::Literal(operand.clone()))
        }
    }

    fn nested(&self) -> Result<Compiler> {
        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            debug!(limit = self.options.max_depth, "expression nesting limit reached");
            return Err(ExprError::NestingLimit {
                limit: self.options.max_depth,
            });
        }
        Ok(Compiler {
            options: self.options,
            depth,
        })
    }
}

/// Compiles an expression source with default options.
pub fn compile(source: &Value) -> Result<Node> {
    Compiler::default().compile(source)
}

/// Returns true if `value` is an array whose head names a known operator.
pub fn is_expression(value: &Value) -> bool {
    match value {
        Value::Array(items) => items
            .first()
            .and_then(Value::as_str)
            .is_some_and(|name| OperatorFamily::of(name).is_some()),
        _ => false,
    }
}

fn split_source(source: &Value) -> Result<(&str, &[Value])> {
    let items = match source {
        Value::Array(items) => items,
        other => {
            return Err(ExprError::malformed(format!(
                "expected an array, found {}",
                crate::types::ValueKind::of(other)
            )))
        }
    };
    match items.split_first() {
        Some((Value::String(name), operands)) => Ok((name.as_str(), operands)),
        Some(_) => Err(ExprError::malformed(
            "requires a string naming the expression at position 0",
        )),
        None => Err(ExprError::malformed("empty expression")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_expression() {
        assert!(is_expression(&json!(["get", "name"])));
        assert!(is_expression(&json!(["zoom"])));
        assert!(!is_expression(&json!(["a", "b"])));
        assert!(!is_expression(&json!([1, 2])));
        assert!(!is_expression(&json!([])));
        assert!(!is_expression(&json!("get")));
    }

    #[test]
    fn test_options_from_json() {
        let options = CompileOptions::from_json(&json!({"maxDepth": 4})).unwrap();
        assert_eq!(options.max_depth, 4);
        let options = CompileOptions::from_json(&json!({})).unwrap();
        assert_eq!(options, CompileOptions::default());
        assert!(CompileOptions::from_json(&json!({"maxDepth": "x"})).is_err());
    }

    #[test]
    fn test_operands_compile_one_level_down() {
        let compiler = Compiler::default();
        assert_eq!(compiler.compile_operand(&json!(5)).unwrap(), Node::literal(5));
        assert_eq!(
            compiler.compile_operand(&json!(["get", "x"])).unwrap(),
            Node::Property("x".into())
        );

        let flat = Compiler::new(CompileOptions { max_depth: 0 });
        assert_eq!(flat.compile_operand(&json!(["a", "b"])).unwrap(), Node::literal(json!(["a", "b"])));
        assert_eq!(
            flat.compile_operand(&json!(["get", "x"])).unwrap_err(),
            ExprError::NestingLimit { limit: 0 }
        );
    }
}
