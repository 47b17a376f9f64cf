// Logging module - HTTP request/response debugging
//
// Transcripts are never written here; only the raw HTTP traffic, and only
// when the user opts in.
pub mod request_logger;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use request_logger::{
    log_request,
    log_request_to_file,
    log_response,
    log_response_to_file,
    RequestLogger,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base application directory (~/.campus-assistant)
pub fn get_app_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let app_dir = PathBuf::from(home_dir).join(".campus-assistant");

    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir)
            .context("Failed to create campus-assistant directory")?;
    }

    Ok(app_dir)
}

/// Get or create the logs directory (~/.campus-assistant/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_app_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate_short_string_untouched() {
        assert_eq!(safe_truncate("hello", 10), "hello");
    }

    #[test]
    fn test_safe_truncate_long_string() {
        assert_eq!(safe_truncate("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_safe_truncate_multibyte() {
        // Must not split inside a code point
        assert_eq!(safe_truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_safe_truncate_tiny_limit() {
        assert_eq!(safe_truncate("abcdef", 2), "...");
    }
}
