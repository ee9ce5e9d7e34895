use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Servers log at info; client commands stay quiet unless asked
    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Some(Commands::Serve { .. }), false) => "info",
        _ => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
