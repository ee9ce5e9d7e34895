use crate::commands::{CmdMessage, CmdResult, DELETED_MESSAGE};
use crate::error::Result;
use crate::model::FlashcardId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &FlashcardId) -> Result<CmdResult> {
    let removed = store.delete_card(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::new(DELETED_MESSAGE));
    result.affected_cards.push(removed);
    Ok(result)
}
