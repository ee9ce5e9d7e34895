use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashcards")]
#[command(version, about = "Flashcard study service and terminal review client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the flashcard server (client commands)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the REST API
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory holding flashcards.json and config.json
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Keep cards in memory only
        #[arg(long)]
        in_memory: bool,
    },

    /// List flashcards, newest first
    #[command(alias = "ls")]
    List {
        /// Only cards with this topic
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Show one flashcard
    #[command(alias = "v")]
    Show {
        /// Flashcard id (24 hex digits)
        id: String,
    },

    /// Add a flashcard
    #[command(alias = "n")]
    Add {
        term: String,

        definition: String,

        /// Topic (default "General"); a topic not seen before is added as a custom topic
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Edit fields of a flashcard
    #[command(alias = "e")]
    Edit {
        /// Flashcard id (24 hex digits)
        id: String,

        #[arg(long)]
        term: Option<String>,

        #[arg(long)]
        definition: Option<String>,

        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Delete a flashcard
    #[command(alias = "rm")]
    Delete {
        /// Flashcard id (24 hex digits)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List known topics
    Topics,

    /// Review cards one at a time
    #[command(alias = "r")]
    Review {
        /// Start filtered to this topic
        #[arg(short, long)]
        topic: Option<String>,
    },
}
