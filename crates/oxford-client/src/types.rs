//! Payload types for the Oxford entries endpoint
//!
//! Every level is optional or defaulted: the extraction must tolerate
//! partial payloads without raising.

use serde::Deserialize;

/// Top-level retrieve payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetrieveEntry {
    #[serde(default)]
    pub results: Vec<HeadwordEntry>,
}

/// One headword result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadwordEntry {
    #[serde(default)]
    pub lexical_entries: Vec<LexicalEntry>,
}

/// A headword grouped by lexical category
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalEntry {
    pub lexical_category: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub senses: Vec<Sense>,
}

/// A single sense of a lexical entry
///
/// `definitions` elements can be JSON `null`; a null first element must read
/// as an absent definition, not an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub definitions: Vec<Option<String>>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Example {
    pub text: Option<String>,
}

/// Extracted word information, the lookup's result
///
/// `examples` is never absent; no examples means an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDetails {
    pub lexical_category: Option<String>,
    pub definition: Option<String>,
    pub examples: Vec<String>,
}

impl WordDetails {
    /// Walk `results[0].lexicalEntries[0].entries[0].senses[0]` best-effort.
    ///
    /// A node missing at any level yields absent fields for everything below
    /// it rather than an error.
    pub fn from_payload(payload: RetrieveEntry) -> Self {
        let lexical_entry = payload
            .results
            .into_iter()
            .next()
            .and_then(|result| result.lexical_entries.into_iter().next());

        let Some(lexical_entry) = lexical_entry else {
            return Self::default();
        };

        let sense = lexical_entry
            .entries
            .into_iter()
            .next()
            .and_then(|entry| entry.senses.into_iter().next());

        let (definition, examples) = match sense {
            Some(sense) => (
                sense.definitions.into_iter().next().flatten(),
                sense.examples.into_iter().filter_map(|e| e.text).collect(),
            ),
            None => (None, Vec::new()),
        };

        Self {
            lexical_category: lexical_entry.lexical_category,
            definition,
            examples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> WordDetails {
        let payload: RetrieveEntry = serde_json::from_str(body).expect("valid JSON");
        WordDetails::from_payload(payload)
    }

    #[test]
    fn test_full_payload_extraction() {
        let details = parse(
            r#"{
                "results": [{
                    "id": "set",
                    "word": "set",
                    "lexicalEntries": [{
                        "lexicalCategory": "noun",
                        "entries": [{
                            "senses": [{
                                "definitions": ["a group of things"],
                                "examples": [{"text": "a set of keys"}]
                            }]
                        }]
                    }]
                }]
            }"#,
        );

        assert_eq!(details.lexical_category.as_deref(), Some("noun"));
        assert_eq!(details.definition.as_deref(), Some("a group of things"));
        assert_eq!(details.examples, vec!["a set of keys".to_string()]);
    }

    #[test]
    fn test_empty_object_yields_default() {
        assert_eq!(parse("{}"), WordDetails::default());
    }

    #[test]
    fn test_missing_entries_keeps_category() {
        let details = parse(
            r#"{"results": [{"lexicalEntries": [{"lexicalCategory": "verb"}]}]}"#,
        );

        assert_eq!(details.lexical_category.as_deref(), Some("verb"));
        assert_eq!(details.definition, None);
        assert!(details.examples.is_empty());
    }

    #[test]
    fn test_missing_senses() {
        let details = parse(
            r#"{"results": [{"lexicalEntries": [{"entries": [{}]}]}]}"#,
        );

        assert_eq!(details.lexical_category, None);
        assert_eq!(details.definition, None);
        assert!(details.examples.is_empty());
    }

    #[test]
    fn test_null_first_definition_reads_as_absent() {
        let details = parse(
            r#"{
                "results": [{
                    "lexicalEntries": [{
                        "lexicalCategory": "noun",
                        "entries": [{
                            "senses": [{"definitions": [null, "a later definition"]}]
                        }]
                    }]
                }]
            }"#,
        );

        assert_eq!(details.definition, None);
    }

    #[test]
    fn test_examples_without_text_are_skipped() {
        let details = parse(
            r#"{
                "results": [{
                    "lexicalEntries": [{
                        "entries": [{
                            "senses": [{
                                "definitions": ["to place"],
                                "examples": [{}, {"text": "set it down"}]
                            }]
                        }]
                    }]
                }]
            }"#,
        );

        assert_eq!(details.examples, vec!["set it down".to_string()]);
    }

    #[test]
    fn test_only_first_result_is_consulted() {
        let details = parse(
            r#"{
                "results": [
                    {"lexicalEntries": [{"lexicalCategory": "noun"}]},
                    {"lexicalEntries": [{"lexicalCategory": "verb"}]}
                ]
            }"#,
        );

        assert_eq!(details.lexical_category.as_deref(), Some("noun"));
    }
}
