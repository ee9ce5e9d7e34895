use chrono::{DateTime, Utc};
use colored::Colorize;
use console::measure_text_width;
use flashcards::model::Flashcard;
use flashcards::session::ReviewSession;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const TOPIC_WIDTH: usize = 22;
const CARD_WIDTH: usize = 60;

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub(super) fn print_cards(cards: &[&Flashcard]) {
    if cards.is_empty() {
        println!("No flashcards for this topic yet.");
        return;
    }

    for card in cards {
        let id = card.id.to_string();
        let topic = pad_to(&truncate_to_width(&card.topic, TOPIC_WIDTH), TOPIC_WIDTH);
        let time_ago = format_time_ago(card.created_at);

        let used = id.len() + 2 + TOPIC_WIDTH + 2 + TIME_WIDTH;
        let term_width = LINE_WIDTH.saturating_sub(used);
        let term = pad_to(&truncate_to_width(&card.term, term_width), term_width);

        println!(
            "{}  {}  {}{}",
            id.dimmed(),
            topic.cyan(),
            term,
            format!("{:>width$}", time_ago, width = TIME_WIDTH).dimmed()
        );
    }
}

pub(super) fn print_full_card(card: &Flashcard) {
    println!("{} {}", card.topic.cyan(), card.id.to_string().dimmed());
    println!("{}", card.term.bold());
    println!("--------------------------------");
    println!("{}", card.definition);
    println!(
        "{}",
        format!(
            "created {}, updated {}",
            format_time_ago(card.created_at),
            format_time_ago(card.updated_at)
        )
        .dimmed()
    );
}

pub(super) fn print_topics(session: &ReviewSession) {
    for topic in session.topics() {
        let count = session.cards().iter().filter(|c| &c.topic == topic).count();
        if count > 0 {
            println!("{} {}", topic, format!("({})", count).dimmed());
        } else {
            println!("{}", topic.dimmed());
        }
    }
}

/// Renders the card under the cursor as a box, with the session counters.
pub(super) fn print_session(session: &ReviewSession) {
    println!();
    println!(
        "{}  {}",
        format!("Reviewed: {}", session.review_count()).magenta(),
        format!("Selected: {}", session.filter()).dimmed()
    );

    let Some(card) = session.current() else {
        println!("{}", "No flashcards for this topic yet.".italic().dimmed());
        return;
    };

    let (label, body) = if session.is_flipped() {
        ("Definition", card.definition.as_str())
    } else {
        ("(f to flip)", card.term.as_str())
    };

    let border = "─".repeat(CARD_WIDTH + 2);
    println!("┌{}┐", border);
    println!("│ {} │", pad_styled(&label.dimmed().to_string(), CARD_WIDTH));
    for line in wrap(body, CARD_WIDTH) {
        let text = if session.is_flipped() {
            line
        } else {
            line.bold().to_string()
        };
        println!("│ {} │", pad_styled(&text, CARD_WIDTH));
    }
    println!("└{}┘", border);

    if let Some((position, total)) = session.position() {
        println!("{}", format!("{} / {}", position, total).dimmed());
    }
}

// Pads by visible width, ignoring any ANSI styling in `styled`.
fn pad_styled(styled: &str, width: usize) -> String {
    let visible = measure_text_width(styled);
    format!("{}{}", styled, " ".repeat(width.saturating_sub(visible)))
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let extra = if current.is_empty() { 0 } else { 1 };
            if !current.is_empty() && current.width() + extra + word.width() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&truncate_to_width(word, width));
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pad_to(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap("a function that remembers its outer scope", 16);
        assert!(lines.iter().all(|l| l.width() <= 16));
        assert_eq!(lines.join(" "), "a function that remembers its outer scope");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("TypeScript Essentials", 8), "TypeScr…");
        assert_eq!(truncate_to_width("DSA", 8), "DSA");
    }

    #[test]
    fn styled_text_pads_to_visible_width() {
        let padded = pad_styled("\u{1b}[1mbold\u{1b}[0m", 10);
        assert!(padded.ends_with("\u{1b}[0m      "));
        assert_eq!(measure_text_width(&padded), 10);
    }
}
