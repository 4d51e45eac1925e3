//! Server-side data commands: demo seeding, mailbox fetch, draft
//! regeneration and manual ticket creation.

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, format_ticket_line};
use crate::api::SupportApi;
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::types::{NewTicket, TicketId};

/// Populate the server with demo tickets
pub async fn cmd_seed<A: SupportApi>(api: &A, output: OutputOptions) -> Result<()> {
    api.seed_demo_data().await?;

    CommandOutput::new(json!({
        "action": "demo_seeded",
        "success": true,
    }))
    .with_text("Seeded demo data".green().to_string())
    .print(output)
}

/// Ask the server to pull new mail from its mailbox
pub async fn cmd_fetch<A: SupportApi>(api: &A, output: OutputOptions) -> Result<()> {
    let message = api.fetch_mailbox().await?;
    let message = message.trim();

    let text = if message.is_empty() {
        "Mailbox fetched".to_string()
    } else {
        message.to_string()
    };

    CommandOutput::new(json!({
        "action": "mailbox_fetched",
        "message": message,
    }))
    .with_text(text)
    .print(output)
}

/// Print a freshly generated draft for a ticket. The server does not store it.
pub async fn cmd_draft<A: SupportApi>(api: &A, id: &TicketId, output: OutputOptions) -> Result<()> {
    let draft = api.regenerate_draft(id).await?;

    CommandOutput::new(json!({
        "id": id,
        "draft": draft,
    }))
    .with_text(draft)
    .print(output)
}

/// Create a ticket by hand, as if it had arrived by mail
pub async fn cmd_create<A: SupportApi>(
    api: &A,
    ticket: NewTicket,
    output: OutputOptions,
) -> Result<()> {
    let created = api.create_ticket(&ticket).await?;

    CommandOutput::new(json!(created))
        .with_text(format!("Created {}", format_ticket_line(&created)))
        .print(output)
}
