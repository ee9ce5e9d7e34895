use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Flashcard, FlashcardDraft};
use crate::store::DataStore;
use crate::validation::validate_draft;

pub fn run<S: DataStore>(store: &mut S, draft: &FlashcardDraft) -> Result<CmdResult> {
    let fields = validate_draft(draft)?;
    let card = Flashcard::new(fields.term, fields.definition, fields.topic);
    store.save_card(&card)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::new(format!(
        "Flashcard created ({}): {}",
        card.topic, card.term
    )));
    result.affected_cards.push(card);
    Ok(result)
}
