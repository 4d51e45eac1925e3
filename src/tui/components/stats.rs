//! Analytics cards and the sentiment chart

use iocraft::prelude::*;

use crate::dashboard::sentiment::{SentimentCounts, sentiment_bars};
use crate::tui::theme::theme;
use crate::types::AnalyticsSnapshot;

/// Width of a full sentiment bar, in cells
const BAR_WIDTH: usize = 24;

#[derive(Default, Props)]
pub struct StatsPanelProps {
    pub analytics: AnalyticsSnapshot,
    pub sentiment: SentimentCounts,
}

/// Counters from the analytics endpoint next to a bar chart of ticket
/// sentiment
#[component]
pub fn StatsPanel(props: &StatsPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let analytics = props.analytics;

    let cards = [
        ("Total (24h)", analytics.total_24h, theme.text),
        ("Pending", analytics.pending, theme.status_pending),
        ("Resolved", analytics.resolved, theme.status_resolved),
    ];

    let bars = sentiment_bars(&props.sentiment, BAR_WIDTH);

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            gap: 1,
        ) {
            #(cards.into_iter().map(|(label, value, color)| element! {
                View(
                    width: 16,
                    height: 4,
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    border_style: BorderStyle::Round,
                    border_color: theme.border,
                ) {
                    Text(content: label, color: theme.text_dimmed)
                    Text(content: value.to_string(), color: color, weight: Weight::Bold)
                }
            }))
            View(
                flex_grow: 1.0,
                height: 4,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                padding_left: 1,
            ) {
                Text(content: "Sentiment", color: theme.text_dimmed)
                #(bars.into_iter().map(|bar| {
                    let color = theme.sentiment_color(bar.sentiment);
                    element! {
                        View(flex_direction: FlexDirection::Row, height: 1) {
                            View(width: 10) {
                                Text(content: bar.sentiment.to_string(), color: color)
                            }
                            Text(content: "█".repeat(bar.filled), color: color)
                            Text(
                                content: format!(" {}", bar.count),
                                color: theme.text_dimmed,
                            )
                        }
                    }
                }))
            }
        }
    }
}
