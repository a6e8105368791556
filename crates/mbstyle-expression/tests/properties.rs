//! Property tests for the equality operators.

use mbstyle_expression::{compile, Evaluable};
use proptest::prelude::*;
use serde_json::{json, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn eval(expression: Value) -> Value {
    compile(&expression)
        .and_then(|node| node.evaluate(&()))
        .unwrap_or_else(|e| panic!("{} failed: {}", expression, e))
}

proptest! {
    #[test]
    fn equals_is_negation_of_not_equals(a in scalar(), b in scalar()) {
        let eq = eval(json!(["==", a.clone(), b.clone()]));
        let ne = eval(json!(["!=", a, b]));
        prop_assert_eq!(eq.as_bool(), ne.as_bool().map(|ne| !ne));
    }

    #[test]
    fn equality_is_reflexive(a in scalar()) {
        prop_assert_eq!(eval(json!(["==", a.clone(), a])), json!(true));
    }

    #[test]
    fn different_kinds_are_never_equal(n in any::<i32>(), s in "[0-9]{1,4}") {
        prop_assert_eq!(eval(json!(["==", n, s])), json!(false));
        prop_assert_eq!(eval(json!(["==", n != 0, n.to_string()])), json!(false));
    }
}
