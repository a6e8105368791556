//! The compiled expression tree.

use serde_json::Value;
use std::cmp::Ordering;

/// A compiled expression.
///
/// Every node owns its children; trees are immutable after compilation and
/// can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Leaves
    Literal(Value),
    /// A feature attribute, resolved through the evaluation context.
    Property(String),
    /// An ambient value such as `zoom`, resolved through the evaluation context.
    Global(String),

    // Decision
    Not(Box<Node>),
    Equals {
        lhs: Box<Node>,
        rhs: Box<Node>,
        negate: bool,
    },
    Compare {
        op: CompareOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    All(Vec<Node>),
    Any(Vec<Node>),
    Case {
        branches: Vec<(Node, Node)>,
        default: Option<Box<Node>>,
    },
    Coalesce(Vec<Node>),
    Match {
        input: Box<Node>,
        arms: Vec<(MatchLabel, Node)>,
        default: Option<Box<Node>>,
    },

    // Lookup
    At {
        index: Box<Node>,
        array: Box<Node>,
    },
    Get {
        name: Box<Node>,
        object: Option<Box<Node>>,
    },
    Has {
        name: Box<Node>,
        object: Option<Box<Node>>,
    },
    Length(Box<Node>),

    // Color
    /// Rounds a number and clamps it into a colour channel.
    Round(Box<Node>),
    /// Renders a channel as a two digit lower-case hex byte.
    ToHex(Box<Node>),
    Concat(Vec<Node>),

    // Types
    /// The first operand that converts to a number.
    ToNumber(Vec<Node>),
    /// The first operand that evaluates to an array.
    ArrayOf(Vec<Node>),
}

impl Node {
    pub fn literal(value: impl Into<Value>) -> Self {
        Node::Literal(value.into())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Returns the constant value of a literal node.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Node::Literal(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn boxed(self) -> Box<Node> {
        Box::new(self)
    }
}

/// The ordered comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Less => "<",
            CompareOp::LessEqual => "<=",
            CompareOp::Greater => ">",
            CompareOp::GreaterEqual => ">=",
        }
    }

    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Less => ordering == Ordering::Less,
            CompareOp::LessEqual => ordering != Ordering::Greater,
            CompareOp::Greater => ordering == Ordering::Greater,
            CompareOp::GreaterEqual => ordering != Ordering::Less,
        }
    }
}

/// A literal `match` label.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchLabel {
    /// A single number or string.
    Single(Value),
    /// An array of numbers and/or strings, matched by containment.
    AnyOf(Vec<Value>),
}
