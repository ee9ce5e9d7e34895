use crate::model::Flashcard;

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;

pub const DELETED_MESSAGE: &str = "Flashcard deleted successfully";

/// Human-readable outcome of a command, logged by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub content: String,
}

impl CmdMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Flashcard>,
    pub listed_cards: Vec<Flashcard>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Flashcard>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<Flashcard>) -> Self {
        self.listed_cards = cards;
        self
    }

    /// The single card a create/get/update/delete acted on.
    pub fn into_affected(self) -> Option<Flashcard> {
        self.affected_cards.into_iter().next()
    }
}
