//! Field normalization and validation for flashcards.
//!
//! Rules:
//! - `term` and `definition` are trimmed and must not be empty
//! - `topic` is trimmed and its first letter upper-cased
//! - a missing or blank topic on create falls back to [`DEFAULT_TOPIC`]
//! - a topic provided on update must not be blank
//!
//! The same normalization runs in the client form before a request is sent
//! and in the command layer before anything reaches the store.

use crate::model::{Flashcard, FlashcardDraft, FlashcardPatch};
use chrono::Utc;
use thiserror::Error;

pub const DEFAULT_TOPIC: &str = "General";

/// Error type for field validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Term cannot be empty.")]
    EmptyTerm,

    #[error("Definition cannot be empty.")]
    EmptyDefinition,

    /// Topic was provided but is blank
    #[error("Topic cannot be empty.")]
    EmptyTopic,
}

/// Fields of a flashcard after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    pub term: String,
    pub definition: String,
    pub topic: String,
}

/// Trims the topic and upper-cases its first character.
///
/// ```
/// use flashcards::validation::normalize_topic;
///
/// assert_eq!(normalize_topic("  js "), "Js");
/// assert_eq!(normalize_topic("ünits"), "Ünits");
/// assert_eq!(normalize_topic("CSS Mastery"), "CSS Mastery");
/// assert_eq!(normalize_topic("   "), "");
/// ```
pub fn normalize_topic(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn required(value: Option<&str>, err: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_string())
}

/// Validates a create request.
pub fn validate_draft(draft: &FlashcardDraft) -> Result<ValidFields, ValidationError> {
    let term = required(draft.term.as_deref(), ValidationError::EmptyTerm)?;
    let definition = required(draft.definition.as_deref(), ValidationError::EmptyDefinition)?;

    let topic = draft
        .topic
        .as_deref()
        .map(normalize_topic)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    Ok(ValidFields {
        term,
        definition,
        topic,
    })
}

/// Applies the provided fields of `patch` to `card`.
///
/// The card is left untouched when any provided field is invalid.
pub fn apply_patch(card: &mut Flashcard, patch: &FlashcardPatch) -> Result<(), ValidationError> {
    let term = match patch.term.as_deref() {
        Some(raw) => Some(required(Some(raw), ValidationError::EmptyTerm)?),
        None => None,
    };
    let definition = match patch.definition.as_deref() {
        Some(raw) => Some(required(Some(raw), ValidationError::EmptyDefinition)?),
        None => None,
    };
    let topic = match patch.topic.as_deref() {
        Some(raw) => {
            let topic = normalize_topic(raw);
            if topic.is_empty() {
                return Err(ValidationError::EmptyTopic);
            }
            Some(topic)
        }
        None => None,
    };

    if let Some(term) = term {
        card.term = term;
    }
    if let Some(definition) = definition {
        card.definition = definition;
    }
    if let Some(topic) = topic {
        card.topic = topic;
    }
    card.updated_at = Utc::now();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_term_and_definition() {
        let missing_term = FlashcardDraft {
            term: Some("   ".into()),
            definition: Some("x".into()),
            topic: None,
        };
        assert_eq!(
            validate_draft(&missing_term),
            Err(ValidationError::EmptyTerm)
        );

        let missing_definition = FlashcardDraft {
            term: Some("x".into()),
            definition: None,
            topic: None,
        };
        assert_eq!(
            validate_draft(&missing_definition),
            Err(ValidationError::EmptyDefinition)
        );
    }

    #[test]
    fn draft_trims_and_capitalizes() {
        let draft = FlashcardDraft::new("  Closure ", " remembers scope ").with_topic(" js");
        let fields = validate_draft(&draft).unwrap();
        assert_eq!(fields.term, "Closure");
        assert_eq!(fields.definition, "remembers scope");
        assert_eq!(fields.topic, "Js");
    }

    #[test]
    fn blank_topic_falls_back_to_default() {
        let draft = FlashcardDraft::new("a", "b").with_topic("  ");
        assert_eq!(validate_draft(&draft).unwrap().topic, DEFAULT_TOPIC);
        let draft = FlashcardDraft::new("a", "b");
        assert_eq!(validate_draft(&draft).unwrap().topic, DEFAULT_TOPIC);
    }

    #[test]
    fn patch_applies_only_provided_fields() {
        let mut card = Flashcard::new("a".into(), "b".into(), "C".into());
        let created = card.created_at;
        let patch = FlashcardPatch {
            topic: Some("rust".into()),
            ..Default::default()
        };
        apply_patch(&mut card, &patch).unwrap();
        assert_eq!(card.term, "a");
        assert_eq!(card.definition, "b");
        assert_eq!(card.topic, "Rust");
        assert_eq!(card.created_at, created);
    }

    #[test]
    fn invalid_patch_leaves_card_untouched() {
        let mut card = Flashcard::new("a".into(), "b".into(), "C".into());
        let before = card.clone();
        let patch = FlashcardPatch {
            term: Some("new".into()),
            topic: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(
            apply_patch(&mut card, &patch),
            Err(ValidationError::EmptyTopic)
        );
        assert_eq!(card, before);
    }

    #[test]
    fn errors_render_as_user_messages() {
        assert_eq!(ValidationError::EmptyTerm.to_string(), "Term cannot be empty.");
        assert_eq!(
            ValidationError::EmptyDefinition.to_string(),
            "Definition cannot be empty."
        );
        let boxed: Box<dyn std::error::Error> = Box::new(ValidationError::EmptyTopic);
        assert_eq!(boxed.to_string(), "Topic cannot be empty.");
    }
}
