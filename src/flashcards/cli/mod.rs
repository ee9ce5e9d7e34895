//! Terminal front-end: argument parsing, handlers and printing.
//!
//! `serve` runs the API in-process; every other command talks to a running
//! server through the library's client and controller.

mod args;
mod print;
mod review;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use flashcards::client::{ClientError, FlashcardClient};
use flashcards::config::FlashcardsConfig;
use flashcards::controller::{FlashcardController, SubmitError};
use flashcards::error::FlashcardError;
use flashcards::form::{FlashcardForm, TopicOption};
use flashcards::model::FlashcardId;
use flashcards::server;
use flashcards::session::TopicFilter;
use flashcards::store::fs::FileStore;
use flashcards::store::memory::InMemoryStore;
use flashcards::validation::{normalize_topic, DEFAULT_TOPIC};
use thiserror::Error;
use tracing::info;

pub use args::{Cli, Commands};
use print::{print_cards, print_full_card, print_success, print_topics, print_warning};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Flashcards(#[from] FlashcardError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Submit(#[from] SubmitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = std::result::Result<T, CliError>;

pub async fn run(cli: Cli) -> CliResult<()> {
    let mut config = FlashcardsConfig::from_environment()?;
    if let Some(server) = &cli.server {
        config.server_url = server.clone();
    }

    match cli.command {
        Some(Commands::Serve {
            port,
            data_dir,
            in_memory,
        }) => handle_serve(config, port, data_dir, in_memory).await,
        Some(Commands::List { topic }) => handle_list(&config, topic).await,
        Some(Commands::Show { id }) => handle_show(&config, &id).await,
        Some(Commands::Add {
            term,
            definition,
            topic,
        }) => handle_add(&config, term, definition, topic).await,
        Some(Commands::Edit {
            id,
            term,
            definition,
            topic,
        }) => handle_edit(&config, &id, term, definition, topic).await,
        Some(Commands::Delete { id, yes }) => handle_delete(&config, &id, yes).await,
        Some(Commands::Topics) => handle_topics(&config).await,
        Some(Commands::Review { topic }) => {
            let mut controller = controller(&config);
            review::run(&mut controller, topic).await
        }
        None => handle_list(&config, None).await,
    }
}

fn controller(config: &FlashcardsConfig) -> FlashcardController {
    FlashcardController::new(FlashcardClient::new(config.server_url.clone()))
}

fn parse_id(raw: &str) -> CliResult<FlashcardId> {
    Ok(raw.trim().parse::<FlashcardId>()?)
}

/// Picks the dropdown entry for `topic`: a known topic, or the custom path.
fn choose_topic(form: &mut FlashcardForm, controller: &FlashcardController, topic: &str) {
    let normalized = normalize_topic(topic);
    if controller.session().topics().contains(&normalized) {
        form.choose_topic(TopicOption::Known(normalized));
    } else {
        form.choose_topic(TopicOption::Custom);
        form.type_custom_topic(topic);
    }
}

async fn handle_serve(
    mut config: FlashcardsConfig,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
    in_memory: bool,
) -> CliResult<()> {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(dir) = data_dir {
        config.data_dir = Some(dir);
    }

    if in_memory {
        info!("Using in-memory store");
        server::serve(InMemoryStore::new(), &config).await?;
    } else {
        let root = config.data_dir()?;
        info!("Using data directory {}", root.display());
        server::serve(FileStore::new(root), &config).await?;
    }
    Ok(())
}

async fn handle_list(config: &FlashcardsConfig, topic: Option<String>) -> CliResult<()> {
    let mut controller = controller(config);
    controller.load().await?;

    if let Some(topic) = topic {
        controller
            .session_mut()
            .filter_by_topic(TopicFilter::Topic(normalize_topic(&topic)));
    }
    let visible: Vec<_> = controller.session().visible().collect();
    print_cards(&visible);
    Ok(())
}

async fn handle_show(config: &FlashcardsConfig, id: &str) -> CliResult<()> {
    let id = parse_id(id)?;
    let card = controller(config).client().get(&id).await?;
    print_full_card(&card);
    Ok(())
}

async fn handle_add(
    config: &FlashcardsConfig,
    term: String,
    definition: String,
    topic: Option<String>,
) -> CliResult<()> {
    let mut controller = controller(config);
    let mut form = FlashcardForm::for_add();
    form.term = term;
    form.definition = definition;
    choose_topic(
        &mut form,
        &controller,
        topic.as_deref().unwrap_or(DEFAULT_TOPIC),
    );

    let card = controller.submit(&mut form).await?;
    print_success(&format!(
        "Flashcard created ({}): {} [{}]",
        card.id, card.term, card.topic
    ));
    Ok(())
}

async fn handle_edit(
    config: &FlashcardsConfig,
    id: &str,
    term: Option<String>,
    definition: Option<String>,
    topic: Option<String>,
) -> CliResult<()> {
    let id = parse_id(id)?;
    let mut controller = controller(config);
    let card = controller.client().get(&id).await?;

    let mut form = FlashcardForm::for_edit(&card, controller.session().topics());
    if let Some(term) = term {
        form.term = term;
    }
    if let Some(definition) = definition {
        form.definition = definition;
    }
    if let Some(topic) = topic {
        choose_topic(&mut form, &controller, &topic);
    }

    let updated = controller.submit(&mut form).await?;
    print_full_card(&updated);
    Ok(())
}

async fn handle_delete(config: &FlashcardsConfig, id: &str, yes: bool) -> CliResult<()> {
    let id = parse_id(id)?;
    if !yes && !confirm("Are you sure you want to delete this card?")? {
        print_warning("Cancelled.");
        return Ok(());
    }

    let message = controller(config).delete(&id).await?;
    print_success(&message);
    Ok(())
}

async fn handle_topics(config: &FlashcardsConfig) -> CliResult<()> {
    let mut controller = controller(config);
    controller.load().await?;
    print_topics(controller.session());
    Ok(())
}

fn confirm(question: &str) -> CliResult<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
