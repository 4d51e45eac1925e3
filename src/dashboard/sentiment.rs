//! Sentiment breakdown of the loaded tickets.

use serde::Serialize;

use crate::types::{Sentiment, Ticket};

/// Ticket counts per sentiment. Missing or unrecognized sentiment counts as
/// neutral, so the total always equals the number of tickets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    fn increment(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

pub fn aggregate_sentiment(tickets: &[Ticket]) -> SentimentCounts {
    tickets
        .iter()
        .fold(SentimentCounts::default(), |mut counts, ticket| {
            counts.increment(ticket.sentiment_or_default());
            counts
        })
}

/// One row of the textual sentiment chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentBar {
    pub sentiment: Sentiment,
    pub count: usize,
    /// Filled cells out of the chart width
    pub filled: usize,
}

/// Proportional bars for each sentiment, `width` cells at 100%.
///
/// Any non-zero count gets at least one cell so small groups stay visible.
pub fn sentiment_bars(counts: &SentimentCounts, width: usize) -> Vec<SentimentBar> {
    let total = counts.total();

    Sentiment::ALL
        .iter()
        .map(|&sentiment| {
            let count = counts.get(sentiment);
            let filled = if total == 0 || count == 0 || width == 0 {
                0
            } else {
                ((count * width + total / 2) / total).clamp(1, width)
            };
            SentimentBar {
                sentiment,
                count,
                filled,
            }
        })
        .collect()
}
