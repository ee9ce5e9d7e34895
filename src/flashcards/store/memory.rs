use super::DataStore;
use crate::error::{FlashcardError, Result};
use crate::model::{Flashcard, FlashcardId};
use std::collections::HashMap;

/// In-memory storage for testing and throwaway servers.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    cards: HashMap<FlashcardId, Flashcard>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_card(&mut self, card: &Flashcard) -> Result<()> {
        self.cards.insert(card.id, card.clone());
        Ok(())
    }

    fn get_card(&self, id: &FlashcardId) -> Result<Flashcard> {
        self.cards
            .get(id)
            .cloned()
            .ok_or(FlashcardError::NotFound(*id))
    }

    fn list_cards(&self) -> Result<Vec<Flashcard>> {
        Ok(self.cards.values().cloned().collect())
    }

    fn delete_card(&mut self, id: &FlashcardId) -> Result<Flashcard> {
        self.cards.remove(id).ok_or(FlashcardError::NotFound(*id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_cards(mut self, count: usize, topic: &str) -> Self {
            for i in 0..count {
                let card = Flashcard::new(
                    format!("Term {}", i + 1),
                    format!("Definition {}", i + 1),
                    topic.to_string(),
                );
                self.store.save_card(&card).unwrap();
            }
            self
        }

        pub fn with_card(mut self, term: &str, topic: &str) -> Self {
            let card = Flashcard::new(term.to_string(), "Some definition".to_string(), topic.into());
            self.store.save_card(&card).unwrap();
            self
        }
    }
}
