//! Builders for test tickets.

#![allow(dead_code)]

use support_dash::types::{AnalyticsSnapshot, Priority, Sentiment, Ticket, TicketId, TicketStatus};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: TicketId::new(id),
                subject: format!("Subject {id}"),
                sender: format!("customer{id}@example.com"),
                body: "Hello, I need help.".to_string(),
                priority: Some(Priority::NotUrgent),
                sentiment: Some(Sentiment::Neutral),
                status: Some(TicketStatus::Pending),
                phone: None,
                alt_email: None,
                requirements: None,
                draft_reply: format!("Draft for {id}"),
                received_at: None,
                final_reply: None,
                approved: None,
            },
        }
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.ticket.subject = subject.to_string();
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.ticket.body = body.to_string();
        self
    }

    pub fn priority(mut self, priority: Option<Priority>) -> Self {
        self.ticket.priority = priority;
        self
    }

    pub fn urgent(self) -> Self {
        self.priority(Some(Priority::Urgent))
    }

    pub fn sentiment(mut self, sentiment: Option<Sentiment>) -> Self {
        self.ticket.sentiment = sentiment;
        self
    }

    pub fn status(mut self, status: Option<TicketStatus>) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn resolved(self) -> Self {
        self.status(Some(TicketStatus::Resolved))
    }

    pub fn draft(mut self, draft: &str) -> Self {
        self.ticket.draft_reply = draft.to_string();
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// A pending, not-urgent, neutral ticket
pub fn mock_ticket(id: &str) -> Ticket {
    TicketBuilder::new(id).build()
}

pub fn mock_tickets(ids: &[&str]) -> Vec<Ticket> {
    ids.iter().map(|id| mock_ticket(id)).collect()
}

pub fn mock_analytics(total_24h: u64, pending: u64, resolved: u64) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total_24h,
        pending,
        resolved,
    }
}
