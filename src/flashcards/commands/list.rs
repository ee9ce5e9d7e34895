use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::sort_newest_first;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut cards = store.list_cards()?;
    sort_newest_first(&mut cards);
    Ok(CmdResult::default().with_listed_cards(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, delete, update};
    use crate::model::{FlashcardDraft, FlashcardPatch};
    use crate::store::memory::InMemoryStore;

    fn terms(store: &InMemoryStore) -> Vec<String> {
        run(store)
            .unwrap()
            .listed_cards
            .into_iter()
            .map(|c| c.term)
            .collect()
    }

    #[test]
    fn lists_newest_first() {
        let mut store = InMemoryStore::new();
        for term in ["first", "second", "third"] {
            create::run(&mut store, &FlashcardDraft::new(term, "d")).unwrap();
        }
        assert_eq!(terms(&store), vec!["third", "second", "first"]);
    }

    #[test]
    fn reflects_updates_and_deletes() {
        let mut store = InMemoryStore::new();
        let a = create::run(&mut store, &FlashcardDraft::new("a", "d"))
            .unwrap()
            .into_affected()
            .unwrap();
        let b = create::run(&mut store, &FlashcardDraft::new("b", "d"))
            .unwrap()
            .into_affected()
            .unwrap();
        create::run(&mut store, &FlashcardDraft::new("c", "d")).unwrap();

        let patch = FlashcardPatch {
            term: Some("a2".into()),
            ..Default::default()
        };
        update::run(&mut store, &a.id, &patch).unwrap();
        delete::run(&mut store, &b.id).unwrap();

        // Updating does not move a card: order stays by creation time
        assert_eq!(terms(&store), vec!["c", "a2"]);
    }
}
