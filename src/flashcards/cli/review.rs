use colored::Colorize;
use flashcards::controller::FlashcardController;
use flashcards::session::{Direction, TopicFilter};
use flashcards::validation::normalize_topic;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use super::print::{print_session, print_success, print_warning};
use super::CliResult;

const HELP: &str = "n next · p previous · f flip · t [topic] filter · r reset · d delete · l reload · q quit";

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Next,
    Previous,
    Flip,
    Filter(TopicFilter),
    Reset,
    Delete,
    Reload,
    Help,
    Quit,
    Unknown(String),
}

fn parse_action(line: &str) -> Action {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" | "n" | "next" => Action::Next,
        "p" | "prev" | "previous" => Action::Previous,
        "f" | "flip" => Action::Flip,
        "t" | "topic" => {
            let topic = normalize_topic(rest);
            if topic.is_empty() || topic == "All" {
                Action::Filter(TopicFilter::All)
            } else {
                Action::Filter(TopicFilter::Topic(topic))
            }
        }
        "r" | "reset" => Action::Reset,
        "d" | "delete" => Action::Delete,
        "l" | "reload" => Action::Reload,
        "?" | "h" | "help" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => Action::Unknown(other.to_string()),
    }
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> CliResult<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(lines.next_line().await?)
}

pub(super) async fn run(controller: &mut FlashcardController, topic: Option<String>) -> CliResult<()> {
    controller.load().await?;
    if let Some(topic) = topic {
        controller
            .session_mut()
            .filter_by_topic(TopicFilter::Topic(normalize_topic(&topic)));
    }

    println!("{}", HELP.dimmed());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_session(controller.session());
        let Some(line) = prompt(&mut lines, "> ").await? else {
            break;
        };

        match parse_action(&line) {
            Action::Next => controller.session_mut().advance(Direction::Forward),
            Action::Previous => controller.session_mut().advance(Direction::Backward),
            Action::Flip => {
                controller.session_mut().flip();
            }
            Action::Filter(filter) => controller.session_mut().filter_by_topic(filter),
            Action::Reset => controller.session_mut().reset(),
            Action::Reload => {
                if let Err(e) = controller.load().await {
                    print_warning(&format!("Could not reload: {}", e));
                }
            }
            Action::Delete => {
                let Some(id) = controller.session().current().map(|c| c.id) else {
                    continue;
                };
                let answer = prompt(&mut lines, "Are you sure you want to delete this card? [y/N] ").await?;
                if !matches!(answer.as_deref().map(str::trim), Some("y" | "Y" | "yes")) {
                    continue;
                }
                match controller.delete(&id).await {
                    Ok(message) => print_success(&message),
                    Err(e) => print_warning(&format!("Could not delete: {}", e)),
                }
            }
            Action::Help => println!("{}", HELP.dimmed()),
            Action::Quit => break,
            Action::Unknown(word) => print_warning(&format!("Unknown command: {} (? for help)", word)),
        }
    }

    println!(
        "Reviewed {} card(s) this session.",
        controller.session().review_count()
    );
    Ok(())
}
