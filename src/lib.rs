pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod sanitize;
pub mod tui;
pub mod types;

pub use api::{HttpSupportClient, SupportApi};
pub use config::{Config, Settings};
pub use error::{DashError, Result};
pub use types::{AnalyticsSnapshot, NewTicket, Priority, Sentiment, Ticket, TicketId, TicketStatus};
