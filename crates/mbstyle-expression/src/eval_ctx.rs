use serde_json::{Map, Value};
use std::collections::HashMap;

/// Name of the global holding the current zoom level.
pub const ZOOM: &str = "zoom";
/// Name of the global holding the feature's geometry type.
pub const GEOMETRY_TYPE: &str = "geometry-type";
/// Name of the global holding the feature id.
pub const FEATURE_ID: &str = "id";
/// Name of the global holding the full property record.
pub const PROPERTIES: &str = "properties";

/// Resolves feature attributes and ambient globals at evaluation time.
///
/// Implemented by the caller; the compiler only borrows it for the duration
/// of one `evaluate` call.
pub trait EvaluationContext {
    /// Returns the named feature property, or `None` if the feature lacks it.
    fn resolve_property(&self, name: &str) -> Option<Value>;

    /// Returns the named global (`zoom`, `geometry-type`, ...).
    fn resolve_global(&self, name: &str) -> Option<Value>;
}

/// A context with no properties and no globals.
impl EvaluationContext for () {
    fn resolve_property(&self, _name: &str) -> Option<Value> {
        None
    }

    fn resolve_global(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// A feature record together with the map state it is being styled under.
#[derive(Debug, Clone, Default)]
pub struct FeatureContext {
    properties: Map<String, Value>,
    globals: HashMap<String, Value>,
}

impl FeatureContext {
    pub fn new(properties: Map<String, Value>) -> Self {
        FeatureContext {
            properties,
            globals: HashMap::new(),
        }
    }

    /// Builds a context from a JSON object. Non-object values yield an empty
    /// property record.
    pub fn from_json(properties: Value) -> Self {
        match properties {
            Value::Object(map) => FeatureContext::new(map),
            _ => FeatureContext::default(),
        }
    }

    pub fn with_zoom(self, zoom: f64) -> Self {
        self.with_global(ZOOM, Value::from(zoom))
    }

    pub fn with_geometry_type(self, geometry_type: &str) -> Self {
        self.with_global(GEOMETRY_TYPE, Value::from(geometry_type))
    }

    pub fn with_id(self, id: impl Into<Value>) -> Self {
        self.with_global(FEATURE_ID, id.into())
    }

    pub fn with_global(mut self, name: &str, value: Value) -> Self {
        self.globals.insert(name.to_string(), value);
        self
    }

    pub fn set_property(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

impl EvaluationContext for FeatureContext {
    fn resolve_property(&self, name: &str) -> Option<Value> {
        self.properties.get(name).cloned()
    }

    fn resolve_global(&self, name: &str) -> Option<Value> {
        match self.globals.get(name) {
            Some(value) => Some(value.clone()),
            // The property record doubles as the `properties` global unless overridden.
            None if name == PROPERTIES => Some(Value::Object(self.properties.clone())),
            None => None,
        }
    }
}
