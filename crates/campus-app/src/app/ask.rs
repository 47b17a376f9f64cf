use anyhow::{bail, Result};
use campus_api::ChatTransport;
use campus_chat::{ChatSessionClient, Exchange, SendRejected};
use colored::Colorize;

/// Run in ask mode - send one message, print the reply and exit.
///
/// A failed exchange prints the fallback text and then returns an error so
/// scripts see a non-zero exit status.
pub async fn run_ask_mode<T: ChatTransport>(transport: T, message: &str, json: bool) -> Result<()> {
    let client = ChatSessionClient::new(transport);

    let exchange = match client.send_message(message).await {
        Ok(exchange) => exchange,
        Err(SendRejected::EmptyInput) => bail!("Nothing to send: the message is empty"),
        Err(rejected) => bail!("Message not sent: {}", rejected),
    };

    match exchange {
        Exchange::Replied(reply) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{} {}", "Assistant:".bright_blue().bold(), reply.display_text());
                if reply.requires_confirmation() {
                    println!("{}", "(Confirmations need a running conversation: use `campus-cli chat`)".bright_black());
                }
            }
            Ok(())
        }
        Exchange::Fallback(error) => {
            if !json {
                println!("{} {}", "Assistant:".bright_blue().bold(), campus_chat::FALLBACK_REPLY_TEXT);
            }
            bail!("Chat request failed: {}", error)
        }
    }
}
