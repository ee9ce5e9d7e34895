use crate::model::FlashcardId;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid flashcard ID: {0}")]
    InvalidId(String),

    #[error("Flashcard not found: {0}")]
    NotFound(FlashcardId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl FlashcardError {
    /// True for failures of the storage backend itself, as opposed to bad input.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            FlashcardError::Io(_) | FlashcardError::Serialization(_) | FlashcardError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn only_storage_failures_are_persistence_errors() {
        assert!(FlashcardError::Store("locked".into()).is_persistence());
        assert!(FlashcardError::Io(std::io::Error::other("disk")).is_persistence());
        assert!(!FlashcardError::Validation(ValidationError::EmptyTerm).is_persistence());
        assert!(!FlashcardError::InvalidId("x".into()).is_persistence());
        assert!(!FlashcardError::Config("bad port".into()).is_persistence());
    }
}
