use anyhow::Result;
use clap::Parser;

use campus_assistant::{
    init_logging, print_completions, run_ask_mode, run_repl_mode, run_view, setup_from_cli,
    CatalogView, Cli, Commands,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Some(shell) = cli.generate {
        print_completions(shell);
        return Ok(());
    }

    // Set up application configuration from CLI
    let app_config = setup_from_cli(&cli)?;
    let clients = app_config.clients()?;

    match cli.command.clone().unwrap_or(Commands::Chat) {
        Commands::Chat => run_repl_mode(clients, cli.verbose).await,
        Commands::Ask { message, json } => run_ask_mode(clients.chat, &message.join(" "), json).await,
        Commands::Events { json } => run_view(&clients.catalog, CatalogView::Events, json).await,
        Commands::Facilities { json } => run_view(&clients.catalog, CatalogView::Facilities, json).await,
        Commands::Bookings { json } => run_view(&clients.catalog, CatalogView::Bookings, json).await,
    }
}
