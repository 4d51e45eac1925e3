use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::api::SupportApi;
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::types::TicketId;

/// Save `text` as the reply to a ticket. The server approves the reply in the
/// same call.
pub async fn cmd_reply<A: SupportApi>(
    api: &A,
    id: &TicketId,
    text: &str,
    output: OutputOptions,
) -> Result<()> {
    api.submit_reply(id, text).await?;

    CommandOutput::new(json!({
        "id": id,
        "action": "reply_saved",
        "approved": true,
    }))
    .with_text(format!("Saved & approved reply for {}", format!("#{}", id).cyan()))
    .print(output)
}
