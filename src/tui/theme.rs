//! Theme system for TUI colors and styles
//!
//! Colors match the CLI output in `commands/mod.rs`.

use iocraft::prelude::Color;

use crate::types::{Priority, Sentiment, TicketStatus};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_pending: Color,
    pub status_resolved: Color,
    pub status_unknown: Color,

    // Priority colors
    pub priority_urgent: Color,
    pub priority_default: Color,

    // Sentiment colors
    pub sentiment_positive: Color,
    pub sentiment_negative: Color,
    pub sentiment_neutral: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
    pub error: Color,
    pub success: Color,
}

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_pending: Color::Yellow,
            status_resolved: Color::Green,
            status_unknown: GREY,

            priority_urgent: Color::Red,
            priority_default: Color::White,

            sentiment_positive: Color::Green,
            sentiment_negative: Color::Red,
            sentiment_neutral: Color::Rgb {
                r: 160,
                g: 160,
                b: 160,
            },

            border: GREY,
            border_focused: Color::Blue,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            id_color: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

impl Theme {
    /// Color for a ticket status; `None` is a status the server sent that
    /// the dashboard does not recognize
    pub fn status_color(&self, status: Option<TicketStatus>) -> Color {
        match status {
            Some(TicketStatus::Pending) => self.status_pending,
            Some(TicketStatus::Resolved) => self.status_resolved,
            None => self.status_unknown,
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Urgent => self.priority_urgent,
            Priority::NotUrgent => self.priority_default,
        }
    }

    pub fn sentiment_color(&self, sentiment: Sentiment) -> Color {
        match sentiment {
            Sentiment::Positive => self.sentiment_positive,
            Sentiment::Negative => self.sentiment_negative,
            Sentiment::Neutral => self.sentiment_neutral,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
