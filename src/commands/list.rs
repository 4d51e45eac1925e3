use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::CommandOutput;
use crate::api::SupportApi;
use crate::cli::OutputOptions;
use crate::dashboard::{FilterMode, filter_tickets};
use crate::error::Result;
use crate::sanitize::sanitize_inline;
use crate::types::Ticket;

/// Longest subject shown in the table before it is cut
const SUBJECT_WIDTH: usize = 48;

#[derive(Tabled)]
struct TicketTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Sentiment")]
    sentiment: String,
    #[tabled(rename = "From")]
    sender: String,
    #[tabled(rename = "Subject")]
    subject: String,
}

impl From<&Ticket> for TicketTableRow {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.to_string(),
            status: ticket.status_label(),
            priority: ticket.priority_or_default().to_string(),
            sentiment: ticket.sentiment_or_default().to_string(),
            sender: sanitize_inline(&ticket.sender),
            subject: truncate(&sanitize_inline(&ticket.subject), SUBJECT_WIDTH),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}

fn render_table(tickets: &[&Ticket]) -> String {
    let rows: Vec<TicketTableRow> = tickets.iter().map(|t| TicketTableRow::from(*t)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// List tickets matching `filter`. `all` includes tickets the server's
/// triage hides from the default list.
pub async fn cmd_list<A: SupportApi>(
    api: &A,
    filter: FilterMode,
    all: bool,
    output: OutputOptions,
) -> Result<()> {
    let tickets = if all {
        api.fetch_all_tickets().await?
    } else {
        api.fetch_tickets().await?
    };
    let visible = filter_tickets(&tickets, filter);

    let json_output = json!(visible);

    let text = if visible.is_empty() {
        format!("No tickets match the '{}' filter", filter)
    } else {
        format!(
            "{}\n{} of {} tickets",
            render_table(&visible),
            visible.len(),
            tickets.len()
        )
    };

    CommandOutput::new(json_output).with_text(text).print(output)
}
