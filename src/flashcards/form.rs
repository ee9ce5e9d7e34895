//! Add/edit form state.
//!
//! One [`FlashcardForm`] serves both modes. The topic is either picked from
//! the known topics or typed in through the "custom" path; leaving the custom
//! path drops whatever was typed. Client-side validation mirrors the server:
//! all three fields must be non-blank after trimming.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{Flashcard, FlashcardDraft, FlashcardId, FlashcardPatch};
use crate::validation::normalize_topic;

pub const REQUIRED_MESSAGE: &str = "All fields are required.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(FlashcardId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicChoice {
    Select,
    Custom,
}

/// What the topic dropdown was set to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicOption {
    None,
    Known(String),
    Custom,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{}", REQUIRED_MESSAGE)]
    MissingFields,

    #[error("A submission is already in progress")]
    Busy,
}

/// Request produced by a valid submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(FlashcardDraft),
    Update(FlashcardId, FlashcardPatch),
}

#[derive(Debug, Clone)]
pub struct FlashcardForm {
    mode: FormMode,
    pub term: String,
    pub definition: String,
    topic: String,
    topic_choice: TopicChoice,
    submitting: bool,
    error: Option<String>,
}

impl FlashcardForm {
    pub fn for_add() -> Self {
        Self {
            mode: FormMode::Add,
            term: String::new(),
            definition: String::new(),
            topic: String::new(),
            topic_choice: TopicChoice::Select,
            submitting: false,
            error: None,
        }
    }

    /// Pre-fills from `card`. A topic outside `known_topics` opens on the custom path.
    pub fn for_edit(card: &Flashcard, known_topics: &BTreeSet<String>) -> Self {
        let is_custom = !card.topic.is_empty() && !known_topics.contains(&card.topic);
        Self {
            mode: FormMode::Edit(card.id),
            term: card.term.clone(),
            definition: card.definition.clone(),
            topic: card.topic.clone(),
            topic_choice: if is_custom {
                TopicChoice::Custom
            } else {
                TopicChoice::Select
            },
            submitting: false,
            error: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn topic_choice(&self) -> TopicChoice {
        self.topic_choice
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Flashcard",
            FormMode::Edit(_) => "Edit Flashcard",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.submitting, &self.mode) {
            (true, _) => "Saving...",
            (false, FormMode::Add) => "Add Card",
            (false, FormMode::Edit(_)) => "Save Changes",
        }
    }

    pub fn choose_topic(&mut self, option: TopicOption) {
        match option {
            TopicOption::Custom => {
                self.topic_choice = TopicChoice::Custom;
                self.topic.clear();
            }
            TopicOption::Known(topic) => {
                self.topic_choice = TopicChoice::Select;
                self.topic = topic;
            }
            TopicOption::None => {
                self.topic_choice = TopicChoice::Select;
                self.topic.clear();
            }
        }
    }

    /// Typing only lands while the custom path is open.
    pub fn type_custom_topic(&mut self, text: &str) {
        if self.topic_choice == TopicChoice::Custom {
            self.topic = text.to_string();
        }
    }

    /// Validates and locks the form. The lock stays until [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }
        self.error = None;

        let term = self.term.trim().to_string();
        let definition = self.definition.trim().to_string();
        let topic = normalize_topic(&self.topic);

        if term.is_empty() || definition.is_empty() || topic.is_empty() {
            let err = FormError::MissingFields;
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.submitting = true;
        Ok(match &self.mode {
            FormMode::Add => Submission::Create(FlashcardDraft::new(term, definition).with_topic(topic)),
            FormMode::Edit(id) => Submission::Update(
                *id,
                FlashcardPatch {
                    term: Some(term),
                    definition: Some(definition),
                    topic: Some(topic),
                },
            ),
        })
    }

    /// Unlocks the form. On failure the message is kept for display.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.error = None;
                if self.mode == FormMode::Add {
                    *self = Self::for_add();
                }
            }
            Err(message) => self.error = Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(topics: &[&str]) -> BTreeSet<String> {
        topics.iter().map(|t| t.to_string()).collect()
    }

    fn filled_add_form() -> FlashcardForm {
        let mut form = FlashcardForm::for_add();
        form.term = "  Closure ".into();
        form.definition = " Remembers scope ".into();
        form.choose_topic(TopicOption::Custom);
        form.type_custom_topic(" js");
        form
    }

    #[test]
    fn submit_trims_and_capitalizes() {
        let mut form = filled_add_form();
        let submission = form.begin_submit().unwrap();
        assert_eq!(
            submission,
            Submission::Create(FlashcardDraft::new("Closure", "Remembers scope").with_topic("Js"))
        );
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Saving...");
    }

    #[test]
    fn blank_field_is_rejected() {
        let mut form = filled_add_form();
        form.choose_topic(TopicOption::None);
        assert_eq!(form.begin_submit(), Err(FormError::MissingFields));
        assert_eq!(form.error(), Some(REQUIRED_MESSAGE));
        assert!(!form.is_submitting());
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let mut form = filled_add_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::Busy));
        form.finish_submit(Err("Failed to add flashcard".into()));
        assert_eq!(form.error(), Some("Failed to add flashcard"));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn switching_away_from_custom_discards_typed_topic() {
        let mut form = FlashcardForm::for_add();
        form.choose_topic(TopicOption::Custom);
        form.type_custom_topic("Elixir");
        form.choose_topic(TopicOption::Known("DSA".into()));
        assert_eq!(form.topic(), "DSA");

        form.type_custom_topic("ignored");
        assert_eq!(form.topic(), "DSA");

        form.choose_topic(TopicOption::Custom);
        assert_eq!(form.topic(), "");
    }

    #[test]
    fn edit_opens_custom_path_for_unknown_topic() {
        let card = Flashcard::new("a".into(), "b".into(), "Elixir".into());
        let form = FlashcardForm::for_edit(&card, &known(&["DSA"]));
        assert_eq!(form.topic_choice(), TopicChoice::Custom);
        assert_eq!(form.title(), "Edit Flashcard");
        assert_eq!(form.submit_label(), "Save Changes");

        let form = FlashcardForm::for_edit(&card, &known(&["Elixir"]));
        assert_eq!(form.topic_choice(), TopicChoice::Select);
    }

    #[test]
    fn edit_submits_full_patch() {
        let card = Flashcard::new("a".into(), "b".into(), "DSA".into());
        let mut form = FlashcardForm::for_edit(&card, &known(&["DSA"]));
        form.definition = "new".into();
        match form.begin_submit().unwrap() {
            Submission::Update(id, patch) => {
                assert_eq!(id, card.id);
                assert_eq!(patch.definition.as_deref(), Some("new"));
                assert_eq!(patch.topic.as_deref(), Some("DSA"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn successful_add_clears_the_form() {
        let mut form = filled_add_form();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(()));
        assert!(form.term.is_empty());
        assert_eq!(form.topic_choice(), TopicChoice::Select);
        assert!(!form.is_submitting());
    }
}
