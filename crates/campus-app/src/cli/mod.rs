use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

#[cfg(test)]
mod tests;

/// CLI arguments for campus-cli
#[derive(Parser, Debug)]
#[command(name = "campus-cli")]
#[command(about = "Campus Assistant - chat with the campus AI and browse events, facilities and bookings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL (e.g., http://localhost:8000)
    /// Falls back to REACT_APP_BACKEND_URL, then http://localhost:8000
    #[arg(long, value_name = "URL", env = "CAMPUS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        env = "CAMPUS_TIMEOUT_SECS",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: Option<u64>,

    /// Enable verbose debug output (shows HTTP requests, responses, headers, etc.)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Write every HTTP request and response to ~/.campus-assistant/logs
    #[arg(long, global = true)]
    pub log_requests: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start an interactive chat with the assistant (default)
    Chat,
    /// Send a single message and print the reply
    Ask {
        /// Message to send; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        /// Print the raw reply as JSON
        #[arg(long)]
        json: bool,
    },
    /// List upcoming campus events
    Events {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
    /// List campus facilities
    Facilities {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
    /// List bookings
    Bookings {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Write completions for `shell` to stdout
pub fn print_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}
