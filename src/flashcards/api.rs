//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every front-end
//! (the HTTP server, tests) goes through it.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Normalizes inputs**: raw id strings from URLs become [`FlashcardId`]s,
//!   so a malformed id fails with `InvalidId` before the store is consulted
//! - **Dispatches** to the matching command
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no validation of record fields (commands own that) and no
//! presentation (the server and CLI own that).
//!
//! ## Generic Over DataStore
//!
//! `FlashcardApi<S: DataStore>` runs on `FileStore` in production and on
//! `InMemoryStore` in tests and throwaway servers.

use crate::commands;
use crate::error::Result;
use crate::model::{FlashcardDraft, FlashcardId, FlashcardPatch};
use crate::store::DataStore;

pub struct FlashcardApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> FlashcardApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_card(&mut self, draft: &FlashcardDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_cards(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_card(&self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::get::run(&self.store, &id)
    }

    pub fn update_card(&mut self, id: &str, patch: &FlashcardPatch) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::update::run(&mut self.store, &id, patch)
    }

    pub fn delete_card(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::delete::run(&mut self.store, &id)
    }
}

fn parse_id(raw: &str) -> Result<FlashcardId> {
    raw.parse()
}

pub use crate::commands::{CmdMessage, CmdResult, DELETED_MESSAGE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlashcardError;
    use crate::store::memory::InMemoryStore;

    const ABSENT: &str = "000000000000000000000000";

    fn api() -> FlashcardApi<InMemoryStore> {
        FlashcardApi::new(InMemoryStore::new())
    }

    #[test]
    fn malformed_ids_are_invalid_for_every_operation() {
        let mut api = api();
        api.create_card(&FlashcardDraft::new("a", "b")).unwrap();

        for raw in ["123", "not-an-id", "0000000000000000000000zz"] {
            assert!(matches!(api.get_card(raw), Err(FlashcardError::InvalidId(_))));
            assert!(matches!(
                api.update_card(raw, &FlashcardPatch::default()),
                Err(FlashcardError::InvalidId(_))
            ));
            assert!(matches!(api.delete_card(raw), Err(FlashcardError::InvalidId(_))));
        }
    }

    #[test]
    fn well_formed_absent_ids_are_not_found() {
        let mut api = api();
        assert!(matches!(api.get_card(ABSENT), Err(FlashcardError::NotFound(_))));
        assert!(matches!(
            api.update_card(ABSENT, &FlashcardPatch::default()),
            Err(FlashcardError::NotFound(_))
        ));
        assert!(matches!(api.delete_card(ABSENT), Err(FlashcardError::NotFound(_))));
    }

    #[test]
    fn id_is_checked_before_the_body() {
        let mut api = api();
        let patch = FlashcardPatch {
            term: Some("".into()),
            ..Default::default()
        };
        assert!(matches!(
            api.update_card("bad", &patch),
            Err(FlashcardError::InvalidId(_))
        ));
        assert!(matches!(
            api.update_card(ABSENT, &patch),
            Err(FlashcardError::NotFound(_))
        ));
    }

    #[test]
    fn dispatches_round_trip() {
        let mut api = api();
        let card = api
            .create_card(&FlashcardDraft::new("Closure", "...").with_topic("js"))
            .unwrap()
            .into_affected()
            .unwrap();

        let listed = api.list_cards().unwrap().listed_cards;
        assert_eq!(listed[0].id, card.id);

        let fetched = api.get_card(&card.id.to_string()).unwrap().into_affected().unwrap();
        assert_eq!(fetched.topic, "Js");

        let deleted = api.delete_card(&card.id.to_string()).unwrap();
        assert_eq!(deleted.messages[0].content, DELETED_MESSAGE);
    }

    #[test]
    fn padded_ids_are_not_trimmed() {
        let mut api = api();
        let card = api
            .create_card(&FlashcardDraft::new("a", "b"))
            .unwrap()
            .into_affected()
            .unwrap();

        let padded = format!(" {} ", card.id);
        assert!(matches!(api.get_card(&padded), Err(FlashcardError::InvalidId(_))));
        assert!(matches!(api.delete_card(&padded), Err(FlashcardError::InvalidId(_))));
        assert!(api.get_card(&card.id.to_string()).is_ok());
    }

    #[test]
    fn twelve_character_strings_are_not_ids() {
        let api = api();
        assert!(matches!(
            api.get_card("aaaaaaaaaaaa"),
            Err(FlashcardError::InvalidId(_))
        ));
    }
}
