//! # Storage Layer
//!
//! This module defines the storage abstraction for flashcards. The [`DataStore`]
//! trait lets the command layer run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All records kept in a single `flashcards.json` map keyed by id
//!   - Rewritten in full on every mutation (temp file + rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage
//!   - No persistence
//!   - Used by tests and `flashcards serve --in-memory`
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── flashcards.json     # { "<id>": { "id", "term", "definition", "topic", ... } }
//! └── config.json         # Optional server configuration
//! ```
//!
//! Ordering is not the store's concern: `list_cards` returns records in any
//! order and the command layer sorts them.

use crate::error::Result;
use crate::model::{Flashcard, FlashcardId};

pub mod fs;
pub mod memory;

/// Abstract interface for flashcard storage.
pub trait DataStore {
    /// Save a flashcard (create or replace)
    fn save_card(&mut self, card: &Flashcard) -> Result<()>;

    /// Get a flashcard by id, failing with `NotFound` when absent
    fn get_card(&self, id: &FlashcardId) -> Result<Flashcard>;

    /// List every stored flashcard, unordered
    fn list_cards(&self) -> Result<Vec<Flashcard>>;

    /// Delete a flashcard permanently, failing with `NotFound` when absent
    fn delete_card(&mut self, id: &FlashcardId) -> Result<Flashcard>;
}
