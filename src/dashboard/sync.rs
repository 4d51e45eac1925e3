//! Async reload and mutation orchestration.
//!
//! Each function talks to a [`SupportApi`] and turns the outcome into the
//! [`DashboardAction`]s the reducer understands. Nothing here touches UI state
//! directly, and nothing coordinates overlapping calls: whichever response
//! lands last is what the dashboard shows.

use crate::api::SupportApi;
use crate::error::Result;
use crate::types::{AnalyticsSnapshot, Ticket, TicketId};

use super::model::{DashboardAction, Mutation};

/// Fetch tickets and analytics concurrently. Either failure fails the whole
/// load, so nothing from a half-successful load is ever committed.
pub async fn load_snapshot<A: SupportApi>(api: &A) -> Result<(Vec<Ticket>, AnalyticsSnapshot)> {
    futures::try_join!(api.fetch_tickets(), api.fetch_analytics())
}

/// Full reload, as the action that completes it.
pub async fn reload<A: SupportApi>(api: &A) -> DashboardAction {
    match load_snapshot(api).await {
        Ok((tickets, analytics)) => {
            tracing::debug!("Loaded {} tickets", tickets.len());
            DashboardAction::SnapshotLoaded { tickets, analytics }
        }
        Err(e) => {
            tracing::warn!("Reload failed: {}", e);
            DashboardAction::SnapshotFailed(e.to_string())
        }
    }
}

/// Run one mutation and, if it succeeds, exactly one full reload.
///
/// Actions go to `emit` as they happen:
/// `MutationSucceeded`, then `ReloadStarted` before the reload is awaited,
/// then `SnapshotLoaded | SnapshotFailed`. A failed mutation emits only
/// `MutationFailed`. Draft regeneration is the exception: it emits the single
/// action from [`regenerate_draft`].
pub async fn run_mutation<A, F>(api: &A, mutation: Mutation, mut emit: F)
where
    A: SupportApi,
    F: FnMut(DashboardAction),
{
    let outcome = match &mutation {
        Mutation::SubmitReply { id, text } => api.submit_reply(id, text).await.map(|_| None),
        Mutation::SetStatus { id, status } => api.set_status(id, *status).await.map(|_| None),
        Mutation::SeedDemo => api.seed_demo_data().await.map(|_| None),
        Mutation::FetchMailbox => api.fetch_mailbox().await.map(Some),
        Mutation::RegenerateDraft { id } => {
            emit(regenerate_draft(api, id.clone()).await);
            return;
        }
    };

    match outcome {
        Ok(detail) => {
            tracing::info!("{} succeeded", mutation.label());
            emit(DashboardAction::MutationSucceeded { mutation, detail });
            emit(DashboardAction::ReloadStarted);
            emit(reload(api).await);
        }
        Err(e) => {
            tracing::warn!("{} failed: {}", mutation.label(), e);
            emit(DashboardAction::MutationFailed {
                message: e.to_string(),
                mutation,
            });
        }
    }
}

/// Ask the server for a new draft. The result replaces the local draft for
/// the ticket and is not followed by a reload.
pub async fn regenerate_draft<A: SupportApi>(api: &A, id: TicketId) -> DashboardAction {
    match api.regenerate_draft(&id).await {
        Ok(text) => DashboardAction::DraftRegenerated { id, text },
        Err(e) => {
            tracing::warn!("Draft regeneration for {} failed: {}", id, e);
            DashboardAction::MutationFailed {
                mutation: Mutation::RegenerateDraft { id },
                message: e.to_string(),
            }
        }
    }
}
