//! Speech formatting rules
//!
//! Pure functions from lookup results to spoken text. Deterministic: the
//! same inputs always produce byte-identical output.

use std::fmt::Write;

use oxford_client::WordDetails;

/// "an" before a vowel-initial category, "a" otherwise
fn article_for(category: &str) -> &'static str {
    let vowel = category
        .chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .unwrap_or(false);

    if vowel {
        "an"
    } else {
        "a"
    }
}

/// Render the spoken summary of a lookup
///
/// Category clause, then definition clause, then - when examples were found -
/// the offer to read them out.
pub fn lookup_speech(word: &str, details: &WordDetails) -> String {
    let category_clause = match &details.lexical_category {
        Some(category) => format!("{} is {} {}.", word, article_for(category), category),
        None => format!("{} has not been classified in any lexical category.", word),
    };

    let definition_clause = match &details.definition {
        Some(definition) => format!("{} means {}.", word, definition),
        None => format!("Sorry. I could not find any definition for the word {}.", word),
    };

    let mut speech = format!("{} {}", category_clause, definition_clause);

    if !details.examples.is_empty() {
        let _ = write!(
            speech,
            " I've found some examples for {}. Would you like to hear them?",
            word
        );
    }

    speech
}

/// Render stored examples as a numbered read-out
///
/// 1-based sequential numbering; an empty list renders an empty string.
pub fn render_examples(examples: &[String]) -> String {
    let mut speech = String::new();
    for (i, example) in examples.iter().enumerate() {
        let _ = write!(speech, "Example {}: {}. ", i + 1, example);
    }
    speech
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(
        category: Option<&str>,
        definition: Option<&str>,
        examples: &[&str],
    ) -> WordDetails {
        WordDetails {
            lexical_category: category.map(str::to_string),
            definition: definition.map(str::to_string),
            examples: examples.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_unclassified_category_clause() {
        let speech = lookup_speech("frumious", &details(None, None, &[]));

        assert!(speech.contains("has not been classified in any lexical category."));
    }

    #[test]
    fn test_article_is_an_for_vowel_initial_categories() {
        for category in ["adverb", "Adjective", "interjection", "Eponym", "ordinal", "Unit"] {
            let speech = lookup_speech("word", &details(Some(category), None, &[]));
            assert!(
                speech.starts_with(&format!("word is an {}.", category)),
                "expected 'an' for {}: {}",
                category,
                speech
            );
        }
    }

    #[test]
    fn test_article_is_a_for_consonant_initial_categories() {
        for category in ["noun", "Verb", "preposition"] {
            let speech = lookup_speech("word", &details(Some(category), None, &[]));
            assert!(
                speech.starts_with(&format!("word is a {}.", category)),
                "expected 'a' for {}: {}",
                category,
                speech
            );
        }
    }

    #[test]
    fn test_missing_definition_apology() {
        let speech = lookup_speech("set", &details(Some("noun"), None, &[]));

        assert!(speech.contains("Sorry. I could not find any definition for the word set."));
    }

    #[test]
    fn test_full_lookup_scenario() {
        let speech = lookup_speech(
            "set",
            &details(Some("noun"), Some("a group of things"), &["a set of keys"]),
        );

        assert_eq!(
            speech,
            "set is a noun. set means a group of things. \
             I've found some examples for set. Would you like to hear them?"
        );
    }

    #[test]
    fn test_no_examples_means_no_offer() {
        let speech = lookup_speech("set", &details(Some("noun"), Some("a group of things"), &[]));

        assert_eq!(speech, "set is a noun. set means a group of things.");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let input = details(Some("noun"), Some("a group of things"), &["a set of keys"]);

        assert_eq!(lookup_speech("set", &input), lookup_speech("set", &input));
    }

    #[test]
    fn test_examples_read_out_numbering() {
        let examples = vec!["runs fast".to_string(), "ran yesterday".to_string()];

        assert_eq!(
            render_examples(&examples),
            "Example 1: runs fast. Example 2: ran yesterday. "
        );
    }

    #[test]
    fn test_empty_examples_render_empty() {
        assert_eq!(render_examples(&[]), "");
    }
}
