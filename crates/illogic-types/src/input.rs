// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Input Shapes
// ─────────────────────────────────────────────────────────────────────
//! Classifier input as an explicit sum type.
//!
//! Each variant is routed to its own rule set: text rules for `Text`,
//! structure rules for `Mapping`, regress detection for `Sequence`.
//! `Scalar` gets no rules and counts as a single element.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum Input {
    Text(String),
    /// Entries in insertion order.
    Mapping(Vec<(String, Value)>),
    Sequence(Vec<Value>),
    Scalar(Value),
}

impl Input {
    /// Route an arbitrary JSON value to its shape.
    ///
    /// Object keys keep insertion order (`preserve_order`).
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => Input::Text(s),
            Value::Object(map) => Input::Mapping(map.into_iter().collect()),
            Value::Array(items) => Input::Sequence(items),
            other => Input::Scalar(other),
        }
    }

    /// Denominator for the subtraction ratio, never below 1.
    ///
    /// Whitespace-delimited words for text, entries for mappings,
    /// length for sequences, 1 otherwise.
    pub fn element_count(&self) -> usize {
        let n = match self {
            Input::Text(text) => text.split_whitespace().count(),
            Input::Mapping(entries) => entries.len(),
            Input::Sequence(items) => items.len(),
            Input::Scalar(_) => 1,
        };
        n.max(1)
    }
}

/// Render a value for a finding detail: strings raw, everything else as
/// compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Vec<(String, Value)>> for Input {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Input::Mapping(entries)
    }
}

impl From<Vec<Value>> for Input {
    fn from(items: Vec<Value>) -> Self {
        Input::Sequence(items)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::from_json(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_routes_shapes() {
        assert!(matches!(Input::from_json(json!("hi")), Input::Text(_)));
        assert!(matches!(Input::from_json(json!({"a": 1})), Input::Mapping(_)));
        assert!(matches!(Input::from_json(json!([1, 2])), Input::Sequence(_)));
        assert!(matches!(Input::from_json(json!(42)), Input::Scalar(_)));
        assert!(matches!(Input::from_json(Value::Null), Input::Scalar(_)));
    }

    #[test]
    fn test_from_json_keeps_key_order() {
        let Input::Mapping(entries) = Input::from_json(json!({"zeta": 1, "alpha": 2})) else {
            panic!("object must route to a mapping");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_element_count_text() {
        assert_eq!(Input::from("the sky is  blue\n").element_count(), 4);
    }

    #[test]
    fn test_element_count_floor_is_one() {
        assert_eq!(Input::from("").element_count(), 1);
        assert_eq!(Input::from("   ").element_count(), 1);
        assert_eq!(Input::Mapping(Vec::new()).element_count(), 1);
        assert_eq!(Input::Sequence(Vec::new()).element_count(), 1);
        assert_eq!(Input::Scalar(json!(true)).element_count(), 1);
    }

    #[test]
    fn test_element_count_collections() {
        let m = Input::from(vec![("a".to_string(), json!(1)), ("b".to_string(), json!(2))]);
        assert_eq!(m.element_count(), 2);
        let s = Input::from(vec![json!(1), json!(1), json!(1)]);
        assert_eq!(s.element_count(), 3);
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("loop")), "loop");
        assert_eq!(render_value(&json!(1)), "1");
        assert_eq!(render_value(&json!(false)), "false");
    }
}
