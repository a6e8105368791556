//! Compiler and evaluator for Mapbox-style JSON expressions.
//!
//! # Overview
//!
//! Expressions are JSON arrays of the form `[operator, ...operands]`. They are
//! compiled once into an immutable [`Node`] tree which is then evaluated
//! against an [`EvaluationContext`] that supplies feature properties and
//! globals such as the current zoom level.
//!
//! Supported families: decision (`!`, `==`, `!=`, `<`, `<=`, `>`, `>=`,
//! `all`, `any`, `case`, `coalesce`, `match`), lookup (`at`, `get`, `has`,
//! `length`), colour (`rgb`), zoom, feature data and types (`literal`,
//! `to-number`, `array`). Other operators of the style language are
//! recognised and rejected with [`ExprError::UnsupportedOperator`].
//!
//! # Example
//!
//! ```
//! use mbstyle_expression::{compile, Evaluable, FeatureContext};
//! use serde_json::json;
//!
//! let expr = compile(&json!(["match", ["get", "kind"], ["park", "forest"], "green", "grey"])).unwrap();
//! let ctx = FeatureContext::from_json(json!({"kind": "forest"}));
//!
//! assert_eq!(expr.evaluate(&ctx).unwrap(), json!("green"));
//! ```

pub mod compile;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod node;
pub mod operators;
pub mod types;
pub mod util;

// Re-export the core public API
pub use compile::{compile, is_expression, CompileOptions, Compiler};
pub use error::{ExprError, Result};
pub use eval_ctx::{EvaluationContext, FeatureContext};
pub use node::{CompareOp, MatchLabel, Node};
pub use operators::OperatorFamily;
pub use types::{Arity, Evaluable, ValueKind};
