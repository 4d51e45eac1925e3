//! In-memory [`SupportApi`] that records every call.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use support_dash::api::SupportApi;
use support_dash::error::{DashError, Result};
use support_dash::types::{AnalyticsSnapshot, NewTicket, Ticket, TicketId, TicketStatus};

/// Fake backend. Mutations change the stored tickets so a following reload
/// observes them, the way the real server behaves.
#[derive(Default)]
pub struct FakeApi {
    tickets: Mutex<Vec<Ticket>>,
    analytics: Mutex<AnalyticsSnapshot>,
    /// Tickets the server holds after `seed_demo_data`
    seed: Mutex<Vec<Ticket>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    mailbox_message: Mutex<String>,
}

impl FakeApi {
    pub fn new(tickets: Vec<Ticket>, analytics: AnalyticsSnapshot) -> Self {
        let api = Self::default();
        *api.tickets.lock().unwrap() = tickets;
        *api.analytics.lock().unwrap() = analytics;
        api
    }

    /// Make `operation` (the trait method name) fail with `RequestFailed`
    pub fn fail_on(self, operation: &'static str) -> Self {
        self.failing.lock().unwrap().insert(operation);
        self
    }

    pub fn with_seed(self, tickets: Vec<Ticket>) -> Self {
        *self.seed.lock().unwrap() = tickets;
        self
    }

    pub fn with_mailbox_message(self, message: &str) -> Self {
        *self.mailbox_message.lock().unwrap() = message.to_string();
        self
    }

    pub fn set_tickets(&self, tickets: Vec<Ticket>) {
        *self.tickets.lock().unwrap() = tickets;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls whose name starts with `operation`
    pub fn count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.split(' ').next() == Some(operation))
            .count()
    }

    pub fn ticket(&self, id: &str) -> Option<Ticket> {
        self.tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id.as_str() == id)
            .cloned()
    }

    fn record(&self, operation: &'static str, detail: String) -> Result<()> {
        let entry = if detail.is_empty() {
            operation.to_string()
        } else {
            format!("{operation} {detail}")
        };
        self.calls.lock().unwrap().push(entry);

        if self.failing.lock().unwrap().contains(operation) {
            return Err(DashError::RequestFailed(format!(
                "{operation} (HTTP 500 Internal Server Error)"
            )));
        }
        Ok(())
    }

    fn update(&self, id: &TicketId, f: impl FnOnce(&mut Ticket)) -> Result<()> {
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| DashError::RequestFailed(format!("ticket {id} (HTTP 404 Not Found)")))?;
        f(ticket);
        Ok(())
    }
}

impl SupportApi for FakeApi {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        self.record("fetch_tickets", String::new())?;
        Ok(self.tickets.lock().unwrap().clone())
    }

    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot> {
        self.record("fetch_analytics", String::new())?;
        Ok(*self.analytics.lock().unwrap())
    }

    async fn submit_reply(&self, id: &TicketId, text: &str) -> Result<()> {
        self.record("submit_reply", format!("{id}"))?;
        self.update(id, |t| {
            t.final_reply = Some(text.to_string());
            t.draft_reply = text.to_string();
            t.approved = Some(true);
        })
    }

    async fn set_status(&self, id: &TicketId, status: TicketStatus) -> Result<()> {
        self.record("set_status", format!("{id} {status}"))?;
        self.update(id, |t| t.status = Some(status))
    }

    async fn seed_demo_data(&self) -> Result<()> {
        self.record("seed_demo_data", String::new())?;
        let seeded = self.seed.lock().unwrap().clone();
        *self.tickets.lock().unwrap() = seeded;
        Ok(())
    }

    async fn fetch_all_tickets(&self) -> Result<Vec<Ticket>> {
        self.record("fetch_all_tickets", String::new())?;
        Ok(self.tickets.lock().unwrap().clone())
    }

    async fn fetch_mailbox(&self) -> Result<String> {
        self.record("fetch_mailbox", String::new())?;
        Ok(self.mailbox_message.lock().unwrap().clone())
    }

    async fn regenerate_draft(&self, id: &TicketId) -> Result<String> {
        self.record("regenerate_draft", format!("{id}"))?;
        Ok(format!("Fresh draft for {id}"))
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        self.record("create_ticket", ticket.subject.clone())?;
        let mut tickets = self.tickets.lock().unwrap();
        let created = Ticket {
            id: TicketId::new((tickets.len() + 1).to_string()),
            subject: ticket.subject.clone(),
            sender: ticket.sender.clone(),
            body: ticket.body.clone(),
            priority: None,
            sentiment: None,
            status: Some(TicketStatus::Pending),
            phone: None,
            alt_email: None,
            requirements: None,
            draft_reply: String::new(),
            received_at: None,
            final_reply: None,
            approved: None,
        };
        tickets.push(created.clone());
        Ok(created)
    }
}
