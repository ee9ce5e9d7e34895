use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{FlashcardId, FlashcardPatch};
use crate::store::DataStore;
use crate::validation::apply_patch;

pub fn run<S: DataStore>(store: &mut S, id: &FlashcardId, patch: &FlashcardPatch) -> Result<CmdResult> {
    let mut card = store.get_card(id)?;
    apply_patch(&mut card, patch)?;
    store.save_card(&card)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::new(format!(
        "Flashcard updated ({}): {}",
        card.id, card.term
    )));
    result.affected_cards.push(card);
    Ok(result)
}
