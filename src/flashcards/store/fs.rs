use super::DataStore;
use crate::error::{FlashcardError, Result};
use crate::model::{Flashcard, FlashcardId};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "flashcards.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FlashcardError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<HashMap<FlashcardId, Flashcard>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(FlashcardError::Io)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        let cards: HashMap<FlashcardId, Flashcard> =
            serde_json::from_str(&content).map_err(FlashcardError::Serialization)?;
        Ok(cards)
    }

    fn persist(&self, cards: &HashMap<FlashcardId, Flashcard>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(cards).map_err(FlashcardError::Serialization)?;

        // Write next to the target, then rename over it so readers never see a partial file
        let data_file = self.data_file();
        let tmp_file = self.root.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp_file, content).map_err(FlashcardError::Io)?;
        fs::rename(&tmp_file, &data_file).map_err(FlashcardError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_card(&mut self, card: &Flashcard) -> Result<()> {
        let mut cards = self.load()?;
        cards.insert(card.id, card.clone());
        self.persist(&cards)
    }

    fn get_card(&self, id: &FlashcardId) -> Result<Flashcard> {
        let mut cards = self.load()?;
        cards.remove(id).ok_or(FlashcardError::NotFound(*id))
    }

    fn list_cards(&self) -> Result<Vec<Flashcard>> {
        Ok(self.load()?.into_values().collect())
    }

    fn delete_card(&mut self, id: &FlashcardId) -> Result<Flashcard> {
        let mut cards = self.load()?;
        let removed = cards.remove(id).ok_or(FlashcardError::NotFound(*id))?;
        self.persist(&cards)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn empty_store_lists_nothing() {
        let (_dir, store) = setup();
        assert!(store.list_cards().unwrap().is_empty());
    }

    #[test]
    fn records_survive_a_new_instance() {
        let (dir, mut store) = setup();
        let card = Flashcard::new("Term".into(), "Definition".into(), "Topic".into());
        store.save_card(&card).unwrap();

        let reopened = FileStore::new(dir.path().join("data"));
        assert_eq!(reopened.get_card(&card.id).unwrap(), card);
        assert_eq!(reopened.list_cards().unwrap().len(), 1);
    }

    #[test]
    fn delete_removes_record_and_reports_missing() {
        let (_dir, mut store) = setup();
        let card = Flashcard::new("Term".into(), "Definition".into(), "Topic".into());
        store.save_card(&card).unwrap();

        let removed = store.delete_card(&card.id).unwrap();
        assert_eq!(removed.id, card.id);
        assert!(matches!(
            store.get_card(&card.id),
            Err(FlashcardError::NotFound(id)) if id == card.id
        ));
        assert!(matches!(
            store.delete_card(&card.id),
            Err(FlashcardError::NotFound(_))
        ));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let (_dir, mut store) = setup();
        let card = Flashcard::new("Term".into(), "Definition".into(), "Topic".into());
        store.save_card(&card).unwrap();

        for entry in fs::read_dir(store.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn corrupt_data_file_is_a_serialization_error() {
        let (_dir, store) = setup();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.data_file(), "{ not json").unwrap();
        assert!(matches!(
            store.list_cards(),
            Err(FlashcardError::Serialization(_))
        ));
    }
}
