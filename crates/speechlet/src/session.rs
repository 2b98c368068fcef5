//! Narrow view over the host-owned session attributes
//!
//! The skill reads and writes exactly one key: the example list stored for
//! the yes/no follow-up turn. Handlers depend on this wrapper, never on the
//! raw attribute map.

use serde_json::{Map, Value};

const EXAMPLES_KEY: &str = "examples";

#[derive(Debug, Clone, Default)]
pub struct SessionAttributes {
    attributes: Map<String, Value>,
}

impl SessionAttributes {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Stored examples, in order. Absent or wrong-typed values read as empty.
    pub fn examples(&self) -> Vec<String> {
        match self.attributes.get(EXAMPLES_KEY) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Replace the stored examples
    pub fn set_examples(&mut self, examples: &[String]) {
        let items = examples
            .iter()
            .map(|example| Value::String(example.clone()))
            .collect();
        self.attributes.insert(EXAMPLES_KEY.to_string(), Value::Array(items));
    }

    /// Hand the attribute map back to the response envelope
    pub fn into_inner(self) -> Map<String, Value> {
        self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_then_read_round_trips() {
        let mut attrs = SessionAttributes::default();
        let examples = vec!["runs fast".to_string(), "ran yesterday".to_string()];

        attrs.set_examples(&examples);

        assert_eq!(attrs.examples(), examples);
    }

    #[test]
    fn test_absent_key_reads_as_empty() {
        assert!(SessionAttributes::default().examples().is_empty());
    }

    #[test]
    fn test_wrong_typed_value_reads_as_empty() {
        let mut map = Map::new();
        map.insert("examples".to_string(), json!("not a list"));

        assert!(SessionAttributes::new(map).examples().is_empty());
    }

    #[test]
    fn test_non_string_items_are_skipped() {
        let mut map = Map::new();
        map.insert("examples".to_string(), json!(["a set of keys", 7, null]));

        assert_eq!(
            SessionAttributes::new(map).examples(),
            vec!["a set of keys".to_string()]
        );
    }

    #[test]
    fn test_other_attributes_survive_a_write() {
        let mut map = Map::new();
        map.insert("unrelated".to_string(), json!(42));
        let mut attrs = SessionAttributes::new(map);

        attrs.set_examples(&["one".to_string()]);
        let inner = attrs.into_inner();

        assert_eq!(inner.get("unrelated"), Some(&json!(42)));
        assert_eq!(inner.get("examples"), Some(&json!(["one"])));
    }
}
