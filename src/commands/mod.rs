//! Command implementations for the `support-dash` binary.
//!
//! Every command takes the [`SupportApi`](crate::api::SupportApi) it talks to,
//! so the same functions drive the real HTTP client and test fakes.

mod analytics;
mod config;
mod dashboard;
mod list;
mod mailbox;
mod reply;
mod status;

pub use analytics::cmd_analytics;
pub use config::{cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use list::cmd_list;
pub use mailbox::{cmd_create, cmd_draft, cmd_fetch, cmd_seed};
pub use reply::cmd_reply;
pub use status::{cmd_resolve, cmd_status};

use std::io::{self, Read};

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::cli::OutputOptions;
use crate::error::{DashError, Result};
use crate::sanitize::sanitize_inline;
use crate::types::{Ticket, TicketStatus};

/// Result of a command, printable as text or JSON
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    /// Text shown instead of the JSON when `--json` is not given
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => println!("{}", text),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Status label colored the way the dashboard colors it
pub fn colored_status(status: Option<TicketStatus>) -> String {
    match status {
        Some(TicketStatus::Pending) => "Pending".yellow().to_string(),
        Some(TicketStatus::Resolved) => "Resolved".green().to_string(),
        None => "Unknown".dimmed().to_string(),
    }
}

/// One-line summary of a ticket: `#id [status] subject (sender)`
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let urgent = if ticket.is_urgent() {
        format!(" {}", "!".red().bold())
    } else {
        String::new()
    };

    format!(
        "{} [{}]{} {} {}",
        format!("#{}", ticket.id).cyan(),
        colored_status(ticket.status),
        urgent,
        sanitize_inline(&ticket.subject),
        format!("({})", sanitize_inline(&ticket.sender)).dimmed()
    )
}

/// Join positional words into a text argument, reading stdin when there are
/// none or the only word is `-`.
pub fn text_or_stdin(words: &[String]) -> Result<String> {
    let text = match words {
        [] => read_stdin()?,
        [dash] if dash == "-" => read_stdin()?,
        _ => words.join(" "),
    };

    if text.trim().is_empty() {
        return Err(DashError::Other("text must not be empty".to_string()));
    }
    Ok(text)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(json: serde_json::Value) -> Ticket {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_text_joins_words() {
        let words = vec!["Thanks,".to_string(), "resolved!".to_string()];
        assert_eq!(text_or_stdin(&words).unwrap(), "Thanks, resolved!");
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let words = vec!["  ".to_string()];
        assert!(text_or_stdin(&words).is_err());
    }

    #[test]
    fn test_ticket_line_contains_id_and_subject() {
        let line = format_ticket_line(&ticket(serde_json::json!({
            "id": 7,
            "subject": "Refund\nplease",
            "sender": "a@b.c",
            "status": "Pending",
            "priority": "Urgent",
        })));
        assert!(line.contains("#7"));
        assert!(line.contains("Pending"));
        assert!(line.contains("Refund please"));
        assert!(line.contains("(a@b.c)"));
    }
}
