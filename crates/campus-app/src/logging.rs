use env_logger::Env;

/// Install the `log` backend. `RUST_LOG` still wins over the default filter.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,campus_api=debug,campus_chat=debug,campus_assistant=debug"
    } else {
        "warn"
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
}
