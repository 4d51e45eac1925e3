//! `reqwest` implementation of [`SupportApi`].

use reqwest::header::{self, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::SupportApi;
use crate::error::{DashError, Result};
use crate::types::{AnalyticsSnapshot, NewTicket, Ticket, TicketId, TicketStatus};

/// HTTP client for the support API rooted at a base URL.
#[derive(Clone, Debug)]
pub struct HttpSupportClient {
    client: Client,
    base: Url,
}

impl HttpSupportClient {
    pub fn new(base: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("support-dash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DashError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DashError::Config(format!("API base URL '{}' cannot carry a path", self.base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Send a request and require a 2xx response.
    async fn send(&self, request: RequestBuilder, context: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("{}: {}", context, e);
            DashError::RequestFailed(format!("{}: {}", context, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{}: HTTP {} from {}", context, status, response.url());
            return Err(DashError::RequestFailed(format!(
                "{} (HTTP {})",
                context, status
            )));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str], context: &str) -> Result<T> {
        let url = self.endpoint(segments)?;
        let response = self.send(self.request(Method::GET, url), context).await?;
        decode_json(response, context).await
    }

    async fn read_text(response: Response, context: &str) -> Result<String> {
        response.text().await.map_err(|e| {
            tracing::warn!("{}: unreadable response: {}", context, e);
            DashError::RequestFailed(format!("{}: invalid response ({})", context, e))
        })
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    response.json::<T>().await.map_err(|e| {
        tracing::warn!("{}: undecodable response: {}", context, e);
        DashError::RequestFailed(format!("{}: invalid response ({})", context, e))
    })
}

impl SupportApi for HttpSupportClient {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        self.get_json(&["api", "emails"], "Failed to load tickets").await
    }

    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot> {
        self.get_json(&["api", "analytics"], "Failed to load analytics").await
    }

    async fn submit_reply(&self, id: &TicketId, text: &str) -> Result<()> {
        let context = "Failed to save reply";
        let url = self.endpoint(&["api", "emails", id.as_str(), "reply"])?;
        let request = self
            .request(Method::POST, url)
            .header(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            )
            .body(text.to_string());
        self.send(request, context).await?;
        Ok(())
    }

    async fn set_status(&self, id: &TicketId, status: TicketStatus) -> Result<()> {
        let context = "Failed to update status";
        let mut url = self.endpoint(&["api", "emails", id.as_str(), "status"])?;
        url.query_pairs_mut().append_pair("status", &status.to_string());
        self.send(self.request(Method::POST, url), context).await?;
        Ok(())
    }

    async fn seed_demo_data(&self) -> Result<()> {
        let url = self.endpoint(&["api", "_demo", "seed"])?;
        self.send(self.request(Method::POST, url), "Failed to seed demo data")
            .await?;
        Ok(())
    }

    async fn fetch_all_tickets(&self) -> Result<Vec<Ticket>> {
        self.get_json(&["api", "emails", "all"], "Failed to load all tickets")
            .await
    }

    async fn fetch_mailbox(&self) -> Result<String> {
        let context = "Failed to fetch mailbox";
        let url = self.endpoint(&["api", "fetch"])?;
        let response = self.send(self.request(Method::GET, url), context).await?;
        Self::read_text(response, context).await
    }

    async fn regenerate_draft(&self, id: &TicketId) -> Result<String> {
        let context = "Failed to regenerate draft";
        let url = self.endpoint(&["api", "emails", id.as_str(), "draft"])?;
        let response = self.send(self.request(Method::POST, url), context).await?;
        Self::read_text(response, context).await
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        let context = "Failed to create ticket";
        let url = self.endpoint(&["api", "emails"])?;
        let request = self.request(Method::POST, url).json(ticket);
        let response = self.send(request, context).await?;
        decode_json(response, context).await
    }
}
