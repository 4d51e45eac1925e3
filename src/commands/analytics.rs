use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::api::SupportApi;
use crate::cli::OutputOptions;
use crate::dashboard::sync::load_snapshot;
use crate::dashboard::{aggregate_sentiment, sentiment_bars};
use crate::error::Result;
use crate::types::Sentiment;

const BAR_WIDTH: usize = 30;

/// Print the analytics counters and the sentiment breakdown of the current
/// ticket list.
pub async fn cmd_analytics<A: SupportApi>(api: &A, output: OutputOptions) -> Result<()> {
    let (tickets, analytics) = load_snapshot(api).await?;
    let sentiment = aggregate_sentiment(&tickets);

    let json_output = json!({
        "analytics": analytics,
        "sentiment": sentiment,
        "ticket_count": tickets.len(),
    });

    let mut text = String::new();
    text.push_str(&format!("{}\n", "Analytics:".cyan().bold()));
    text.push_str(&format!("  Total (24h): {}\n", analytics.total_24h.bold()));
    text.push_str(&format!("  Pending:     {}\n", analytics.pending.yellow()));
    text.push_str(&format!("  Resolved:    {}\n", analytics.resolved.green()));
    text.push('\n');
    text.push_str(&format!(
        "{} {}\n",
        "Sentiment".cyan().bold(),
        format!("({} tickets)", tickets.len()).dimmed()
    ));

    for bar in sentiment_bars(&sentiment, BAR_WIDTH) {
        // Pad before coloring so the bars line up
        let label = format!("{:<9}", bar.sentiment.to_string());
        let label = match bar.sentiment {
            Sentiment::Positive => label.green().to_string(),
            Sentiment::Negative => label.red().to_string(),
            Sentiment::Neutral => label.dimmed().to_string(),
        };
        text.push_str(&format!(
            "  {} {}{} {}\n",
            label,
            "█".repeat(bar.filled),
            " ".repeat(BAR_WIDTH - bar.filled),
            bar.count
        ));
    }

    CommandOutput::new(json_output)
        .with_text(text.trim_end().to_string())
        .print(output)
}
