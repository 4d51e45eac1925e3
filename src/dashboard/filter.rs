//! Ticket list filtering.

use std::fmt;
use std::str::FromStr;

use crate::error::DashError;
use crate::types::{Ticket, TicketStatus};

/// Which subset of the ticket list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Urgent,
    Pending,
    Resolved,
}

impl FilterMode {
    pub const ALL_MODES: [FilterMode; 4] = [
        FilterMode::All,
        FilterMode::Urgent,
        FilterMode::Pending,
        FilterMode::Resolved,
    ];

    /// Next mode in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            FilterMode::All => FilterMode::Urgent,
            FilterMode::Urgent => FilterMode::Pending,
            FilterMode::Pending => FilterMode::Resolved,
            FilterMode::Resolved => FilterMode::All,
        }
    }

    /// Mode bound to a number key (`1`-`4`)
    pub fn from_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)? as usize;
        Self::ALL_MODES.get(index.checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Urgent => "Urgent",
            FilterMode::Pending => "Pending",
            FilterMode::Resolved => "Resolved",
        }
    }

    pub fn matches(self, ticket: &Ticket) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Urgent => ticket.is_urgent(),
            FilterMode::Pending => ticket.status == Some(TicketStatus::Pending),
            FilterMode::Resolved => ticket.status == Some(TicketStatus::Resolved),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Urgent => write!(f, "urgent"),
            FilterMode::Pending => write!(f, "pending"),
            FilterMode::Resolved => write!(f, "resolved"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "urgent" => Ok(FilterMode::Urgent),
            "pending" => Ok(FilterMode::Pending),
            "resolved" => Ok(FilterMode::Resolved),
            _ => Err(DashError::InvalidFilter(s.to_string())),
        }
    }
}

/// Tickets matching `mode`, in their original order.
pub fn filter_tickets(tickets: &[Ticket], mode: FilterMode) -> Vec<&Ticket> {
    tickets.iter().filter(|t| mode.matches(t)).collect()
}
