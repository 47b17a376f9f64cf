//! Campus Assistant terminal client
//!
//! Interactive chat with the campus AI backend plus read-only views of
//! events, facilities and bookings.

pub mod app;
pub mod cli;
pub mod logging;

pub use app::{run_ask_mode, run_repl_mode, run_view, setup_from_cli, AppConfig, CatalogView};
pub use cli::{print_completions, Cli, Commands};
pub use logging::init_logging;
