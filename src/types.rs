use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DashError;

/// Placeholder shown for extracted fields the server left empty.
pub const PLACEHOLDER: &str = "-";

/// Opaque ticket identifier.
///
/// The server emits numeric ids; anything the server sends (number or string)
/// is kept verbatim as text and only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        TicketId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TicketId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TicketId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        TicketId(s.to_string())
    }
}

impl From<String> for TicketId {
    fn from(s: String) -> Self {
        TicketId(s)
    }
}

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => TicketId(n.to_string()),
            RawId::Text(s) => TicketId(s),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Priority {
    Urgent,
    #[default]
    #[serde(rename = "Not urgent")]
    NotUrgent,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Urgent => write!(f, "Urgent"),
            Priority::NotUrgent => write!(f, "Not urgent"),
        }
    }
}

impl FromStr for Priority {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Ok(Priority::Urgent),
            "not urgent" | "not_urgent" | "noturgent" => Ok(Priority::NotUrgent),
            _ => Err(DashError::Other(format!("invalid priority: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

impl FromStr for Sentiment {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(DashError::Other(format!("invalid sentiment: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TicketStatus {
    Pending,
    Resolved,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Pending => write!(f, "Pending"),
            TicketStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TicketStatus::Pending),
            "resolved" => Ok(TicketStatus::Resolved),
            _ => Err(DashError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["Pending", "Resolved"];

/// A support email as served by `/api/emails`, with its AI-derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sender: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub alt_email: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub draft_reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

impl Ticket {
    /// Priority with an absent or unrecognized value read as "Not urgent".
    pub fn priority_or_default(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Sentiment with an absent or unrecognized value read as Neutral.
    pub fn sentiment_or_default(&self) -> Sentiment {
        self.sentiment.unwrap_or_default()
    }

    pub fn is_urgent(&self) -> bool {
        self.priority == Some(Priority::Urgent)
    }

    pub fn is_resolved(&self) -> bool {
        self.status == Some(TicketStatus::Resolved)
    }

    /// "Mark Resolved" is offered for anything not already resolved.
    pub fn can_resolve(&self) -> bool {
        !self.is_resolved()
    }

    pub fn is_approved(&self) -> bool {
        self.approved.unwrap_or(false)
    }

    pub fn status_label(&self) -> String {
        self.status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn phone_display(&self) -> &str {
        or_placeholder(self.phone.as_deref())
    }

    pub fn alt_email_display(&self) -> &str {
        or_placeholder(self.alt_email.as_deref())
    }

    pub fn requirements_display(&self) -> &str {
        or_placeholder(self.requirements.as_deref())
    }

    /// Received timestamp formatted for display, if the server sent a
    /// parseable one.
    pub fn received_display(&self) -> Option<String> {
        let raw = self.received_at.as_deref()?;
        let parsed: jiff::civil::DateTime = raw.trim().parse().ok()?;
        Some(parsed.strftime("%Y-%m-%d %H:%M").to_string())
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// Server-computed counters from `/api/analytics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default, rename = "total24h")]
    pub total_24h: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub resolved: u64,
}

/// Payload for `POST /api/emails`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicket {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an optional string field into an enum, treating empty or
/// unrecognized values as absent. Only the server's exact spelling counts:
/// `"urgent"` or `"RESOLVED"` are unrecognized on the wire even though the
/// CLI accepts them as arguments.
fn lenient_enum<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<T>().ok().filter(|v| v.to_string() == s)))
}
