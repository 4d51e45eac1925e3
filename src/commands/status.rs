use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, colored_status};
use crate::api::SupportApi;
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::types::{TicketId, TicketStatus};

/// Set a ticket's status
pub async fn cmd_status<A: SupportApi>(
    api: &A,
    id: &TicketId,
    status: TicketStatus,
    output: OutputOptions,
) -> Result<()> {
    api.set_status(id, status).await?;

    CommandOutput::new(json!({
        "id": id,
        "action": "status_changed",
        "new_status": status.to_string(),
    }))
    .with_text(format!(
        "Updated {} -> {}",
        format!("#{}", id).cyan(),
        colored_status(Some(status))
    ))
    .print(output)
}

/// Mark a ticket resolved
pub async fn cmd_resolve<A: SupportApi>(
    api: &A,
    id: &TicketId,
    output: OutputOptions,
) -> Result<()> {
    cmd_status(api, id, TicketStatus::Resolved, output).await
}
