//! # Review Session
//!
//! In-memory view state for one study session. Nothing here is persisted and
//! nothing here does I/O: the [`controller`](crate::controller) feeds server
//! results in, front-ends read the state back out.
//!
//! ## State
//!
//! - `cards`: every fetched card, newest first
//! - `topics`: sorted union of [`SEED_TOPICS`] and every topic seen in a card
//! - `filter`: [`TopicFilter::All`] or one topic; defines the *visible* cards
//! - `cursor`: position in the visible cards, wrapping in both directions
//! - `flipped`: whether the card under the cursor shows its definition
//! - `reviewed` / `review_count`: ids flipped at least once, and how many
//!
//! ## Cursor rules
//!
//! The cursor goes back to 0 on load, add, delete, filter change and reset.
//! Deleting the displayed card does not try to keep the relative position.
//! Any cursor move turns the card face back to the term.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::model::{Flashcard, FlashcardId};

pub const SEED_TOPICS: [&str; 18] = [
    "JavaScript Fundamentals",
    "Git and Version Control",
    "CSS Mastery",
    "Python Basics",
    "UI/UX Design Patterns",
    "React Patterns",
    "TypeScript Essentials",
    "Database Systems",
    "Node.js Development",
    "API Design and REST",
    "Testing Strategies",
    "Docker Container",
    "DSA",
    "Web Security",
    "Performance Optimization",
    "AWS Cloud Service",
    "Microservice Architecture",
    "DevOps and CI/CD",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TopicFilter {
    #[default]
    All,
    Topic(String),
}

impl TopicFilter {
    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Topic(topic) => card.topic == *topic,
        }
    }
}

impl fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicFilter::All => write!(f, "All"),
            TopicFilter::Topic(topic) => write!(f, "{}", topic),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    cards: Vec<Flashcard>,
    topics: BTreeSet<String>,
    filter: TopicFilter,
    cursor: usize,
    flipped: bool,
    reviewed: HashSet<FlashcardId>,
    review_count: usize,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            topics: SEED_TOPICS.iter().map(|t| t.to_string()).collect(),
            filter: TopicFilter::All,
            cursor: 0,
            flipped: false,
            reviewed: HashSet::new(),
            review_count: 0,
        }
    }

    // --- Reconciling server data ---

    /// Replaces the local list with a fresh fetch.
    pub fn load(&mut self, cards: Vec<Flashcard>) {
        for card in &cards {
            self.remember_topic(&card.topic);
        }
        self.cards = cards;
        self.move_cursor(0);
    }

    /// A card was created: it goes first and the filter is cleared so it shows.
    pub fn add_card(&mut self, card: Flashcard) {
        self.remember_topic(&card.topic);
        self.cards.insert(0, card);
        self.filter = TopicFilter::All;
        self.move_cursor(0);
    }

    /// A card was edited: replace it in place.
    pub fn update_card(&mut self, card: Flashcard) {
        self.remember_topic(&card.topic);
        if let Some(slot) = self.cards.iter_mut().find(|c| c.id == card.id) {
            *slot = card;
        }
        if self.cursor >= self.visible_len() {
            self.move_cursor(0);
        }
    }

    /// A card was deleted on the server.
    pub fn remove_card(&mut self, id: &FlashcardId) {
        self.cards.retain(|c| c.id != *id);
        self.move_cursor(0);
    }

    fn remember_topic(&mut self, topic: &str) {
        if !topic.is_empty() && !self.topics.contains(topic) {
            self.topics.insert(topic.to_string());
        }
    }

    // --- Navigation ---

    pub fn filter_by_topic(&mut self, filter: TopicFilter) {
        self.filter = filter;
        self.move_cursor(0);
    }

    /// Moves the cursor one card, wrapping at either end. No-op when nothing is visible.
    pub fn advance(&mut self, direction: Direction) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let next = match direction {
            Direction::Forward => (self.cursor + 1) % len,
            Direction::Backward => (self.cursor + len - 1) % len,
        };
        self.move_cursor(next);
    }

    fn move_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.flipped = false;
    }

    // --- Reviewing ---

    /// Counts the current card as reviewed. Returns false when there is no
    /// current card or it was already counted this session.
    pub fn mark_reviewed(&mut self) -> bool {
        let Some(id) = self.current().map(|c| c.id) else {
            return false;
        };
        if !self.reviewed.insert(id) {
            return false;
        }
        self.review_count += 1;
        true
    }

    /// Turns the current card over. Revealing the definition marks it reviewed.
    pub fn flip(&mut self) -> bool {
        if self.current().is_none() {
            return false;
        }
        self.flipped = !self.flipped;
        if self.flipped {
            self.mark_reviewed();
        }
        self.flipped
    }

    /// Clears filter, review progress and cursor. The card list is kept.
    pub fn reset(&mut self) {
        self.filter = TopicFilter::All;
        self.review_count = 0;
        self.reviewed.clear();
        self.move_cursor(0);
    }

    // --- Reading state ---

    pub fn visible(&self) -> impl Iterator<Item = &Flashcard> {
        self.cards.iter().filter(move |c| self.filter.matches(c))
    }

    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.visible().nth(self.cursor)
    }

    /// One-based position and visible total, for "3 / 10" displays.
    pub fn position(&self) -> Option<(usize, usize)> {
        let len = self.visible_len();
        (len > 0).then(|| (self.cursor + 1, len))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn card(&self, id: &FlashcardId) -> Option<&Flashcard> {
        self.cards.iter().find(|c| c.id == *id)
    }

    pub fn topics(&self) -> &BTreeSet<String> {
        &self.topics
    }

    pub fn filter(&self) -> &TopicFilter {
        &self.filter
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn review_count(&self) -> usize {
        self.review_count
    }

    pub fn is_reviewed(&self, id: &FlashcardId) -> bool {
        self.reviewed.contains(id)
    }
}
