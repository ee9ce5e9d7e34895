use crate::model::Flashcard;
use std::cmp::Reverse;

/// Orders cards newest first. Cards created in the same instant fall back to
/// id order, which follows creation order within a process.
pub fn sort_newest_first(cards: &mut [Flashcard]) {
    cards.sort_by_key(|card| Reverse((card.created_at, card.id)));
}
