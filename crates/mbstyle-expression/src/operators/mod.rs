//! Operator families and the process-wide name → family table.

pub mod color;
pub mod decision;
pub mod feature_data;
pub mod lookup;
pub mod types;
pub mod zoom;

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// The functional category an operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorFamily {
    Color,
    Decision,
    FeatureData,
    Heatmap,
    Lookup,
    Math,
    Ramp,
    String,
    Types,
    VariableBinding,
    Zoom,
}

impl OperatorFamily {
    /// Looks up the family of an operator name.
    pub fn of(name: &str) -> Option<OperatorFamily> {
        family_table().get(name).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorFamily::Color => "color",
            OperatorFamily::Decision => "decision",
            OperatorFamily::FeatureData => "feature data",
            OperatorFamily::Heatmap => "heatmap",
            OperatorFamily::Lookup => "lookup",
            OperatorFamily::Math => "math",
            OperatorFamily::Ramp => "ramp",
            OperatorFamily::String => "string",
            OperatorFamily::Types => "types",
            OperatorFamily::VariableBinding => "variable binding",
            OperatorFamily::Zoom => "zoom",
        }
    }
}

impl fmt::Display for OperatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every operator name the compiler recognises.
pub const OPERATORS: &[(&str, OperatorFamily)] = &[
    ("rgb", OperatorFamily::Color),
    ("rgba", OperatorFamily::Color),
    ("to-rgba", OperatorFamily::Color),
    ("!", OperatorFamily::Decision),
    ("!=", OperatorFamily::Decision),
    ("<", OperatorFamily::Decision),
    ("<=", OperatorFamily::Decision),
    ("==", OperatorFamily::Decision),
    (">", OperatorFamily::Decision),
    (">=", OperatorFamily::Decision),
    ("all", OperatorFamily::Decision),
    ("any", OperatorFamily::Decision),
    ("case", OperatorFamily::Decision),
    ("coalesce", OperatorFamily::Decision),
    ("match", OperatorFamily::Decision),
    ("geometry-type", OperatorFamily::FeatureData),
    ("id", OperatorFamily::FeatureData),
    ("properties", OperatorFamily::FeatureData),
    ("heatmap-density", OperatorFamily::Heatmap),
    ("at", OperatorFamily::Lookup),
    ("get", OperatorFamily::Lookup),
    ("has", OperatorFamily::Lookup),
    ("length", OperatorFamily::Lookup),
    ("-", OperatorFamily::Math),
    ("*", OperatorFamily::Math),
    ("/", OperatorFamily::Math),
    ("%", OperatorFamily::Math),
    ("^", OperatorFamily::Math),
    ("+", OperatorFamily::Math),
    ("acos", OperatorFamily::Math),
    ("asin", OperatorFamily::Math),
    ("atan", OperatorFamily::Math),
    ("cos", OperatorFamily::Math),
    ("e", OperatorFamily::Math),
    ("ln", OperatorFamily::Math),
    ("ln2", OperatorFamily::Math),
    ("log10", OperatorFamily::Math),
    ("log2", OperatorFamily::Math),
    ("max", OperatorFamily::Math),
    ("min", OperatorFamily::Math),
    ("pi", OperatorFamily::Math),
    ("sin", OperatorFamily::Math),
    ("sqrt", OperatorFamily::Math),
    ("tan", OperatorFamily::Math),
    ("interpolate", OperatorFamily::Ramp),
    ("step", OperatorFamily::Ramp),
    ("concat", OperatorFamily::String),
    ("downcase", OperatorFamily::String),
    ("upcase", OperatorFamily::String),
    ("array", OperatorFamily::Types),
    ("literal", OperatorFamily::Types),
    ("to-number", OperatorFamily::Types),
    ("let", OperatorFamily::VariableBinding),
    ("var", OperatorFamily::VariableBinding),
    ("zoom", OperatorFamily::Zoom),
];

fn family_table() -> &'static HashMap<&'static str, OperatorFamily> {
    static TABLE: OnceLock<HashMap<&'static str, OperatorFamily>> = OnceLock::new();
    TABLE.get_or_init(|| OPERATORS.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_lookup() {
        assert_eq!(OperatorFamily::of("match"), Some(OperatorFamily::Decision));
        assert_eq!(OperatorFamily::of("get"), Some(OperatorFamily::Lookup));
        assert_eq!(OperatorFamily::of("rgb"), Some(OperatorFamily::Color));
        assert_eq!(OperatorFamily::of("zoom"), Some(OperatorFamily::Zoom));
        assert_eq!(OperatorFamily::of("+"), Some(OperatorFamily::Math));
        assert_eq!(OperatorFamily::of("to-number"), Some(OperatorFamily::Types));
        assert_eq!(OperatorFamily::of("array"), Some(OperatorFamily::Types));
        assert_eq!(OperatorFamily::of("nope"), None);
    }

    #[test]
    fn test_operator_names_are_unique() {
        assert_eq!(family_table().len(), OPERATORS.len());
    }
}
