use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{get_logs_dir, safe_truncate};

const CONSOLE_BODY_LIMIT: usize = 5000;

/// Process-wide sequence so ids stay unique within one millisecond
static NEXT_REQUEST: AtomicU64 = AtomicU64::new(0);

/// `{millis}-{seq}`: sorts by time and never repeats within a process
fn next_request_id() -> String {
    let seq = NEXT_REQUEST.fetch_add(1, Ordering::Relaxed);
    format!("{}-{:06}", Utc::now().timestamp_millis(), seq)
}

/// Per-client switchboard for HTTP debugging output.
///
/// Console dumps are enabled with `verbose`; file logs only when a logs
/// directory has been configured.
#[derive(Debug, Clone, Default)]
pub struct RequestLogger {
    verbose: bool,
    logs_dir: Option<PathBuf>,
}

impl RequestLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            logs_dir: None,
        }
    }

    /// Also write every request/response pair under `logs_dir`
    pub fn with_logs_dir(mut self, logs_dir: PathBuf) -> Self {
        self.logs_dir = Some(logs_dir);
        self
    }

    /// Write file logs under the default `~/.campus-assistant/logs`
    pub fn with_default_logs_dir(self) -> Result<Self> {
        Ok(self.with_logs_dir(get_logs_dir()?))
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn logs_dir(&self) -> Option<&Path> {
        self.logs_dir.as_deref()
    }

    /// Record an outgoing request. Returns the id that pairs it with its response.
    pub fn request(&self, method: &str, url: &str, body: Option<&serde_json::Value>) -> String {
        let request_id = next_request_id();
        log::debug!("{} {} (request {})", method, url, request_id);

        log_request(method, url, body, self.verbose);

        if let Some(dir) = &self.logs_dir {
            if let Err(e) = log_request_to_file(dir, &request_id, method, url, body) {
                log::warn!("Failed to write request log: {:#}", e);
            }
        }

        request_id
    }

    /// Record the response to a request previously passed to [`RequestLogger::request`]
    pub fn response(
        &self,
        request_id: &str,
        status: &reqwest::StatusCode,
        headers: &reqwest::header::HeaderMap,
        body: &str,
    ) {
        log::debug!("HTTP {} for request {} ({} bytes)", status.as_u16(), request_id, body.len());

        log_response(status, headers, body, self.verbose);

        if let Some(dir) = &self.logs_dir {
            if let Err(e) = log_response_to_file(dir, request_id, status, headers, body) {
                log::warn!("Failed to write response log: {:#}", e);
            }
        }
    }
}

fn describe_url(url: &str) -> Vec<(&'static str, String)> {
    match reqwest::Url::parse(url) {
        Ok(parsed_url) => vec![
            ("URL", url.to_string()),
            ("Host", parsed_url.host_str().unwrap_or("unknown").to_string()),
            (
                "Port",
                parsed_url.port().map(|p| p.to_string()).unwrap_or_else(|| {
                    if parsed_url.scheme() == "https" {
                        "443 (default)".to_string()
                    } else {
                        "80 (default)".to_string()
                    }
                }),
            ),
            ("Scheme", parsed_url.scheme().to_string()),
        ],
        Err(_) => vec![("URL", url.to_string())],
    }
}

fn pretty_body(body: &str) -> String {
    // Try to pretty-print JSON, fall back to raw text
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}

fn print_truncated(text: &str) {
    if text.chars().count() > CONSOLE_BODY_LIMIT {
        eprintln!("{}", safe_truncate(text, CONSOLE_BODY_LIMIT));
        eprintln!("\n{}", format!("... (truncated, total {} bytes)", text.len()).bright_black());
    } else {
        eprintln!("{}", text);
    }
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(method: &str, url: &str, body: Option<&serde_json::Value>, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_cyan());
    eprintln!("{}", format!("🔍 HTTP REQUEST DEBUG ({})", method).bright_cyan().bold());
    eprintln!("{}", "═".repeat(80).bright_cyan());

    for (label, value) in describe_url(url) {
        eprintln!("{}: {}", label.bright_yellow(), value);
    }

    if let Some(body) = body {
        eprintln!("\n{}", "Headers:".bright_yellow());
        eprintln!("  Content-Type: application/json");

        eprintln!("\n{}", "Request Body:".bright_yellow());
        match serde_json::to_string_pretty(body) {
            Ok(json) => print_truncated(&json),
            Err(e) => eprintln!("{}", format!("Error serializing request: {}", e).red()),
        }
    }

    eprintln!("{}", "═".repeat(80).bright_cyan());
    eprintln!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(
    status: &reqwest::StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
    verbose: bool,
) {
    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_green());
    eprintln!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    eprintln!("{}", "═".repeat(80).bright_green());

    eprintln!(
        "{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    eprintln!("\n{}", "Headers:".bright_yellow());
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            eprintln!("  {}: {}", name.as_str().bright_white(), val_str);
        }
    }

    eprintln!("\n{}", "Response Body:".bright_yellow());
    print_truncated(&pretty_body(body));

    eprintln!("{}", "═".repeat(80).bright_green());
    eprintln!();
}

/// Log HTTP request to file for persistent debugging
pub fn log_request_to_file(
    logs_dir: &Path,
    request_id: &str,
    method: &str,
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<PathBuf> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    let file_path = logs_dir.join(format!("req-{}.txt", request_id));

    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Request: {}\n", request_id));
    log_content.push_str(&format!("Method: {}\n", method));
    for (label, value) in describe_url(url) {
        log_content.push_str(&format!("{}: {}\n", label, value));
    }
    log_content.push('\n');

    if let Some(body) = body {
        log_content.push_str("Headers:\n");
        log_content.push_str("  Content-Type: application/json\n\n");
        log_content.push_str("Request Body:\n");
        match serde_json::to_string_pretty(body) {
            Ok(json) => {
                log_content.push_str(&json);
                log_content.push('\n');
            }
            Err(e) => {
                log_content.push_str(&format!("Error serializing request: {}\n", e));
            }
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    log::info!("Request logged to {}", file_path.display());

    Ok(file_path)
}

/// Log HTTP response to file for persistent debugging
pub fn log_response_to_file(
    logs_dir: &Path,
    request_id: &str,
    status: &reqwest::StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    // Same id as the request file so the pair sorts together
    let file_path = logs_dir.join(format!("resp-{}.txt", request_id));

    let mut log_content = String::new();
    log_content.push_str("HTTP RESPONSE LOG\n");
    log_content.push_str("=================\n\n");
    log_content.push_str(&format!("Request: {}\n", request_id));
    log_content.push_str(&format!(
        "Status: {} {}\n\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ));

    log_content.push_str("Headers:\n");
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            log_content.push_str(&format!("  {}: {}\n", name.as_str(), val_str));
        }
    }

    log_content.push_str("\nResponse Body:\n");
    log_content.push_str(&pretty_body(body));
    log_content.push('\n');

    log_content.push_str("\n---\n");
    log_content.push_str(&format!("Response Size: {} bytes\n", body.len()));

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write response log to {}", file_path.display()))?;

    log::info!("Response logged to {}", file_path.display());

    Ok(file_path)
}
