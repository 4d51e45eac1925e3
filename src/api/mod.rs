//! Data access for the support API.
//!
//! Every operation is a single request/response against the configured base
//! URL. There is no caching, retry or backoff; any failure surfaces as
//! [`DashError::RequestFailed`](crate::error::DashError::RequestFailed).

pub mod client;

use crate::error::Result;
use crate::types::{AnalyticsSnapshot, NewTicket, Ticket, TicketId, TicketStatus};

pub use client::HttpSupportClient;

/// Operations the dashboard and CLI perform against the support backend.
pub trait SupportApi: Send + Sync {
    /// Tickets the server's triage filter considers support requests, in
    /// server order
    fn fetch_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send;

    /// Aggregate counters for the header cards
    fn fetch_analytics(
        &self,
    ) -> impl std::future::Future<Output = Result<AnalyticsSnapshot>> + Send;

    /// Persist `text` as the ticket's reply and approve it in one call
    fn submit_reply(
        &self,
        id: &TicketId,
        text: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Set the ticket's status
    fn set_status(
        &self,
        id: &TicketId,
        status: TicketStatus,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Ask the server to populate demo tickets
    fn seed_demo_data(&self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Every stored ticket, including ones the triage filter hides
    fn fetch_all_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send;

    /// Ask the server to pull new mail; returns the server's message
    fn fetch_mailbox(&self) -> impl std::future::Future<Output = Result<String>> + Send;

    /// A freshly generated draft reply (not persisted by the server)
    fn regenerate_draft(
        &self,
        id: &TicketId,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Submit a new ticket for triage
    fn create_ticket(
        &self,
        ticket: &NewTicket,
    ) -> impl std::future::Future<Output = Result<Ticket>> + Send;
}
