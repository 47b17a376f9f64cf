pub mod ask;
pub mod render;
pub mod repl;
pub mod setup;
pub mod views;

pub use ask::run_ask_mode;
pub use repl::run_repl_mode;
pub use setup::{setup_from_cli, AppConfig};
pub use views::{run_view, CatalogView};
