use anyhow::Result;
use campus_api::ApiClients;
use campus_chat::{Conversation, Exchange};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::app::render::format_message;
use crate::app::views::{run_view, CatalogView};

/// First assistant entry of every conversation. Local only, never sent.
pub const GREETING: &str = "Hello! I'm your Campus AI Assistant.\n\n\
    • Find facilities\n\
    • Discover events\n\
    • Book rooms\n\n\
    How can I help you today?";

/// Canned prompts offered as shortcuts
pub struct QuickAction {
    pub command: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        command: "/events",
        label: "Show events",
        prompt: "What events are happening?",
    },
    QuickAction {
        command: "/facilities",
        label: "Find facilities",
        prompt: "Show available facilities",
    },
    QuickAction {
        command: "/book",
        label: "Book a room",
        prompt: "I want to book a room",
    },
];

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    Exit,
    Help,
    Session,
    History,
    View(CatalogView),
    Send(String),
    Unknown(String),
}

pub fn parse_input(line: &str) -> ReplInput {
    let line = line.trim();

    if line.is_empty() {
        return ReplInput::Empty;
    }
    if line == "exit" || line == "quit" || line == "/exit" || line == "/quit" {
        return ReplInput::Exit;
    }
    if !line.starts_with('/') {
        return ReplInput::Send(line.to_string());
    }

    if let Some(action) = QUICK_ACTIONS.iter().find(|a| a.command == line) {
        return ReplInput::Send(action.prompt.to_string());
    }

    match line {
        "/help" => ReplInput::Help,
        "/session" => ReplInput::Session,
        "/history" => ReplInput::History,
        _ => {
            if let Some(("/view", name)) = line.split_once(' ') {
                if let Some(view) = CatalogView::from_str(name) {
                    return ReplInput::View(view);
                }
            }
            ReplInput::Unknown(line.to_string())
        }
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_cyan());
    for action in QUICK_ACTIONS {
        println!("  {:<24} - {} (\"{}\")", action.command, action.label, action.prompt);
    }
    println!("  {:<24} - List events, facilities or bookings", "/view <events|facilities|bookings>");
    println!("  {:<24} - Show the backend session id", "/session");
    println!("  {:<24} - Reprint this conversation", "/history");
    println!("  {:<24} - Show this help", "/help");
    println!("  {:<24} - Leave", "exit, quit");
}

/// Run interactive REPL mode
pub async fn run_repl_mode(clients: ApiClients, verbose: bool) -> Result<()> {
    println!("{}", "🎓 Campus Assistant".bright_cyan().bold());
    println!("{}", format!("Backend: {}", clients.chat.base_url()).bright_black());
    println!("{}", "Type 'exit' or 'quit' to exit, or '/help' to see available commands\n".bright_black());

    let catalog = clients.catalog;
    let mut conversation = Conversation::new(clients.chat).with_greeting(GREETING);

    if let Some(greeting) = conversation.transcript().last() {
        println!("{}\n", format_message(greeting));
    }

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let input = parse_input(&line);
                if input != ReplInput::Empty {
                    let _ = rl.add_history_entry(line.trim());
                }

                match input {
                    ReplInput::Empty => continue,
                    ReplInput::Exit => {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                    ReplInput::Help => print_help(),
                    ReplInput::Session => match conversation.client().session_id() {
                        Some(id) => println!("{} Session: {}", "🔗".bright_cyan(), id),
                        None => println!("{} No session yet; one is assigned by the first reply", "ℹ️".bright_blue()),
                    },
                    ReplInput::History => {
                        for message in conversation.transcript().iter() {
                            println!("{}\n", format_message(message));
                        }
                    }
                    ReplInput::View(view) => {
                        if let Err(e) = run_view(&catalog, view, false).await {
                            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
                        }
                        println!();
                    }
                    ReplInput::Unknown(command) => {
                        eprintln!("{} Unknown command '{}'. Type /help for a list.", "❌".bright_red(), command);
                    }
                    ReplInput::Send(text) => {
                        println!("{}", "…".bright_black());

                        let exchange = match conversation.send(&text).await {
                            Ok(exchange) => exchange,
                            Err(rejected) => {
                                eprintln!("{} {}", "⚠️".yellow(), rejected);
                                continue;
                            }
                        };

                        if let Some(reply) = conversation.transcript().last() {
                            println!("\n{}\n", format_message(reply));
                        }

                        match &exchange {
                            Exchange::Replied(reply) => {
                                if verbose {
                                    if let Some(intent) = &reply.intent {
                                        println!("{}", format!("intent: {}", intent).bright_black());
                                    }
                                }
                                if reply.requires_confirmation() {
                                    println!("{}\n", "Reply 'yes' to confirm or 'no' to cancel.".bright_yellow());
                                }
                            }
                            Exchange::Fallback(error) => {
                                if verbose {
                                    eprintln!("{}", format!("cause: {}", error).bright_black());
                                }
                            }
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_is_sent_trimmed() {
        assert_eq!(
            parse_input("  where is the library?  "),
            ReplInput::Send("where is the library?".to_string())
        );
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert_eq!(parse_input("   "), ReplInput::Empty);
    }

    #[test]
    fn test_exit_words() {
        for word in ["exit", "quit", "/quit", " exit "] {
            assert_eq!(parse_input(word), ReplInput::Exit);
        }
    }

    #[test]
    fn test_quick_actions_expand_to_prompts() {
        assert_eq!(
            parse_input("/events"),
            ReplInput::Send("What events are happening?".to_string())
        );
        assert_eq!(
            parse_input("/facilities"),
            ReplInput::Send("Show available facilities".to_string())
        );
        assert_eq!(
            parse_input("/book"),
            ReplInput::Send("I want to book a room".to_string())
        );
    }

    #[test]
    fn test_view_commands() {
        assert_eq!(parse_input("/view events"), ReplInput::View(CatalogView::Events));
        assert_eq!(parse_input("/view bookings"), ReplInput::View(CatalogView::Bookings));
        assert_eq!(
            parse_input("/view menu"),
            ReplInput::Unknown("/view menu".to_string())
        );
        assert_eq!(parse_input("/view   rooms"), ReplInput::View(CatalogView::Facilities));
        assert_eq!(
            parse_input("/viewevents"),
            ReplInput::Unknown("/viewevents".to_string())
        );
        assert_eq!(parse_input("/view"), ReplInput::Unknown("/view".to_string()));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(parse_input("/help"), ReplInput::Help);
        assert_eq!(parse_input("/session"), ReplInput::Session);
        assert_eq!(parse_input("/history"), ReplInput::History);
        assert_eq!(parse_input("/dance"), ReplInput::Unknown("/dance".to_string()));
    }
}
