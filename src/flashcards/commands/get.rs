use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::FlashcardId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &FlashcardId) -> Result<CmdResult> {
    let card = store.get_card(id)?;
    Ok(CmdResult::default().with_affected_cards(vec![card]))
}
