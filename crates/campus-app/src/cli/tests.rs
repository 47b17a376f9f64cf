#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;
    use serial_test::serial;
    use std::env;

    // Helper function to parse CLI args from a string slice
    fn parse_cli_from_args(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut cli_args = vec!["campus-cli"];
        cli_args.extend(args);

        Cli::try_parse_from(cli_args)
    }

    fn clear_env() {
        env::remove_var("CAMPUS_API_URL");
        env::remove_var("CAMPUS_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_default_cli_parsing() -> Result<(), Box<dyn std::error::Error>> {
        clear_env();
        let cli = parse_cli_from_args(&[])?;

        assert!(cli.command.is_none());
        assert!(cli.api_url.is_none());
        assert!(cli.timeout_secs.is_none());
        assert!(!cli.verbose);
        assert!(!cli.log_requests);
        assert!(!cli.no_color);
        assert!(cli.generate.is_none());

        Ok(())
    }

    #[test]
    #[serial]
    fn test_api_url_flag() -> Result<(), Box<dyn std::error::Error>> {
        clear_env();
        let cli = parse_cli_from_args(&["--api-url", "http://campus.local:9000"])?;

        assert_eq!(cli.api_url.as_deref(), Some("http://campus.local:9000"));

        Ok(())
    }

    #[test]
    #[serial]
    fn test_api_url_from_env() -> Result<(), Box<dyn std::error::Error>> {
        clear_env();
        env::set_var("CAMPUS_API_URL", "http://from-env:1234");

        let cli = parse_cli_from_args(&[])?;
        assert_eq!(cli.api_url.as_deref(), Some("http://from-env:1234"));

        clear_env();
        Ok(())
    }

    #[test]
    #[serial]
    fn test_global_flags_after_subcommand() -> Result<(), Box<dyn std::error::Error>> {
        clear_env();
        let cli = parse_cli_from_args(&["events", "--json", "-v", "--timeout-secs", "5"])?;

        assert_eq!(cli.command, Some(Commands::Events { json: true }));
        assert!(cli.verbose);
        assert_eq!(cli.timeout_secs, Some(5));

        Ok(())
    }

    #[test]
    fn test_ask_joins_words() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&["ask", "Show", "available", "facilities"])?;

        match cli.command {
            Some(Commands::Ask { message, json }) => {
                assert_eq!(message.join(" "), "Show available facilities");
                assert!(!json);
            }
            other => panic!("Expected Ask command, got {:?}", other),
        }

        Ok(())
    }

    #[test]
    fn test_ask_requires_message() {
        assert!(parse_cli_from_args(&["ask"]).is_err());
    }

    #[test]
    fn test_view_subcommands() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            parse_cli_from_args(&["facilities"])?.command,
            Some(Commands::Facilities { json: false })
        );
        assert_eq!(
            parse_cli_from_args(&["bookings", "--json"])?.command,
            Some(Commands::Bookings { json: true })
        );
        assert_eq!(parse_cli_from_args(&["chat"])?.command, Some(Commands::Chat));

        Ok(())
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        assert!(parse_cli_from_args(&["--timeout-secs", "soon"]).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse_cli_from_args(&["--timeout-secs", "0"]).is_err());
        assert!(parse_cli_from_args(&["--timeout-secs", "1"]).is_ok());
    }

    #[test]
    fn test_generate_shell() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse_cli_from_args(&["--generate", "bash"])?;
        assert_eq!(cli.generate, Some(clap_complete::Shell::Bash));

        Ok(())
    }
}
