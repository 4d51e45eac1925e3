//! Dashboard model types for testable state management
//!
//! This module separates state (`DashboardState`) from view
//! (`DashboardViewModel`) so the whole interaction model can be unit tested
//! without the iocraft framework. Network I/O never happens here: actions that
//! need it map to an [`Effect`] which the component runs through
//! [`super::sync`], feeding the resulting actions back into the reducer.

use std::collections::HashMap;

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::sanitize::{sanitize_body, sanitize_inline};
use crate::tui::components::footer::Shortcut;
use crate::tui::components::toast::Toast;
use crate::types::{AnalyticsSnapshot, Priority, Sentiment, Ticket, TicketId, TicketStatus};

use super::filter::{FilterMode, filter_tickets};
use super::sentiment::{SentimentCounts, aggregate_sentiment};

// ============================================================================
// State Types
// ============================================================================

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Last successfully loaded tickets, in server order
    pub tickets: Vec<Ticket>,
    /// Last successfully loaded analytics counters
    pub analytics: AnalyticsSnapshot,
    /// A reload is in flight
    pub loading: bool,
    /// Message from the most recent failed reload
    pub load_error: Option<String>,
    pub filter: FilterMode,
    /// Index into the filtered list
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Locally edited draft replies; tickets without an entry show the
    /// server's draft
    pub drafts: HashMap<TicketId, String>,
    /// The draft editor has focus
    pub editing: bool,
    /// Blocking notice the operator must dismiss
    pub notice: Option<Notice>,
    pub toast: Option<Toast>,
    pub show_help: bool,
    pub should_exit: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tickets: Vec::new(),
            analytics: AnalyticsSnapshot::default(),
            loading: true,
            load_error: None,
            filter: FilterMode::default(),
            selected_index: 0,
            scroll_offset: 0,
            drafts: HashMap::new(),
            editing: false,
            notice: None,
            toast: None,
            show_help: false,
            should_exit: false,
        }
    }
}

impl DashboardState {
    pub fn visible_tickets(&self) -> Vec<&Ticket> {
        filter_tickets(&self.tickets, self.filter)
    }

    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.visible_tickets().get(self.selected_index).copied()
    }

    /// Draft text for a ticket: the local edit if any, else the server draft
    pub fn draft_for<'a>(&'a self, ticket: &'a Ticket) -> &'a str {
        self.drafts
            .get(&ticket.id)
            .map(String::as_str)
            .unwrap_or(ticket.draft_reply.as_str())
    }
}

/// A server-side change requested by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Save the reply text and approve it
    SubmitReply { id: TicketId, text: String },
    SetStatus { id: TicketId, status: TicketStatus },
    SeedDemo,
    FetchMailbox,
    /// Ask for a new AI draft; replaces the local draft, no reload
    RegenerateDraft { id: TicketId },
}

impl Mutation {
    /// Name of the operation as shown in the UI
    pub fn label(&self) -> &'static str {
        match self {
            Mutation::SubmitReply { .. } => "Save & Approve",
            Mutation::SetStatus { .. } => "Update status",
            Mutation::SeedDemo => "Seed demo data",
            Mutation::FetchMailbox => "Fetch mailbox",
            Mutation::RegenerateDraft { .. } => "Regenerate draft",
        }
    }

    pub fn progress_message(&self) -> String {
        match self {
            Mutation::SubmitReply { id, .. } => format!("Saving reply for #{}...", id),
            Mutation::SetStatus { id, status } => format!("Marking #{} {}...", id, status),
            Mutation::SeedDemo => "Seeding demo data...".to_string(),
            Mutation::FetchMailbox => "Fetching new mail...".to_string(),
            Mutation::RegenerateDraft { id } => format!("Regenerating draft for #{}...", id),
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            Mutation::SubmitReply { .. } => "Saved & approved".to_string(),
            Mutation::SetStatus { id, status } => format!("Marked #{} {}", id, status),
            Mutation::SeedDemo => "Demo data seeded".to_string(),
            Mutation::FetchMailbox => "Mailbox fetched".to_string(),
            Mutation::RegenerateDraft { .. } => "Draft regenerated".to_string(),
        }
    }
}

/// Severity of a blocking notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Modal message shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,

    // Filtering
    SetFilter(FilterMode),
    CycleFilter,

    // Draft editing
    StartEditing,
    StopEditing,
    EditDraft { id: TicketId, text: String },

    // Operator requests (run as effects by the component)
    Refresh,
    SaveReply,
    Resolve,
    SeedDemo,
    FetchMailbox,
    RegenerateDraft,

    // Async lifecycle
    ReloadStarted,
    SnapshotLoaded {
        tickets: Vec<Ticket>,
        analytics: AnalyticsSnapshot,
    },
    SnapshotFailed(String),
    MutationStarted(Mutation),
    MutationSucceeded {
        mutation: Mutation,
        /// Message returned by the server, if any
        detail: Option<String>,
    },
    MutationFailed { mutation: Mutation, message: String },
    DraftRegenerated { id: TicketId, text: String },

    // Modals
    DismissNotice,
    ShowHelp,
    HideHelp,

    Quit,
}

impl DashboardAction {
    /// Results of async work keep the current toast; operator input clears it.
    fn is_async_result(&self) -> bool {
        matches!(
            self,
            DashboardAction::ReloadStarted
                | DashboardAction::SnapshotLoaded { .. }
                | DashboardAction::SnapshotFailed(_)
                | DashboardAction::MutationStarted(_)
                | DashboardAction::MutationSucceeded { .. }
                | DashboardAction::MutationFailed { .. }
                | DashboardAction::DraftRegenerated { .. }
        )
    }
}

/// Async work an action asks the component to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Reload,
    Mutate(Mutation),
}

/// The effect `action` requests in `state`, if any.
///
/// Called with the state *before* the action is reduced, so the selected
/// ticket and its current draft are the ones the operator saw.
pub fn action_effect(state: &DashboardState, action: &DashboardAction) -> Option<Effect> {
    match action {
        DashboardAction::Refresh => Some(Effect::Reload),
        DashboardAction::SeedDemo => Some(Effect::Mutate(Mutation::SeedDemo)),
        DashboardAction::FetchMailbox => Some(Effect::Mutate(Mutation::FetchMailbox)),
        DashboardAction::SaveReply => state.selected_ticket().map(|ticket| {
            Effect::Mutate(Mutation::SubmitReply {
                id: ticket.id.clone(),
                text: state.draft_for(ticket).to_string(),
            })
        }),
        DashboardAction::Resolve => state
            .selected_ticket()
            .filter(|ticket| ticket.can_resolve())
            .map(|ticket| {
                Effect::Mutate(Mutation::SetStatus {
                    id: ticket.id.clone(),
                    status: TicketStatus::Resolved,
                })
            }),
        DashboardAction::RegenerateDraft => state
            .selected_ticket()
            .map(|ticket| {
                Effect::Mutate(Mutation::RegenerateDraft {
                    id: ticket.id.clone(),
                })
            }),
        _ => None,
    }
}

// ============================================================================
// View Model Types
// ============================================================================

/// Computed view model for rendering the entire dashboard
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub header: HeaderViewModel,
    pub filter_bar: FilterBarViewModel,
    pub list: ListViewModel,
    /// Detail of the selected ticket
    pub detail: Option<DetailViewModel>,
    /// Persistent banner for a failed reload
    pub load_error: Option<String>,
    pub notice: Option<Notice>,
    pub toast: Option<Toast>,
    pub show_help: bool,
    pub editing: bool,
    pub is_loading: bool,
    pub shortcuts: Vec<Shortcut>,
}

/// Analytics cards and sentiment chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub analytics: AnalyticsSnapshot,
    pub sentiment: SentimentCounts,
    pub ticket_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarViewModel {
    pub active: FilterMode,
    /// Every mode with the number of tickets it matches
    pub counts: Vec<(FilterMode, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Rows inside the visible window
    pub rows: Vec<TicketRow>,
    pub filtered_count: usize,
    pub selected_index: usize,
    pub scroll_offset: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketRow {
    pub id: TicketId,
    pub subject: String,
    pub sender: String,
    pub priority: Priority,
    pub sentiment: Sentiment,
    pub status: Option<TicketStatus>,
    pub status_label: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub id: TicketId,
    pub subject: String,
    pub sender: String,
    pub received: Option<String>,
    pub priority: Priority,
    pub sentiment: Sentiment,
    pub status: Option<TicketStatus>,
    pub status_label: String,
    /// Sanitized body text
    pub body: String,
    pub phone: String,
    pub alt_email: String,
    pub requirements: String,
    pub draft: String,
    /// The draft differs from the server's copy
    pub draft_edited: bool,
    pub approved: bool,
    pub can_resolve: bool,
}

/// Pure function: compute view model from state
pub fn compute_dashboard_view_model(state: &DashboardState, list_height: usize) -> DashboardViewModel {
    let visible = state.visible_tickets();

    let rows = visible
        .iter()
        .enumerate()
        .skip(state.scroll_offset)
        .take(list_height)
        .map(|(index, ticket)| TicketRow {
            id: ticket.id.clone(),
            subject: sanitize_inline(&ticket.subject),
            sender: sanitize_inline(&ticket.sender),
            priority: ticket.priority_or_default(),
            sentiment: ticket.sentiment_or_default(),
            status: ticket.status,
            status_label: ticket.status_label(),
            is_selected: index == state.selected_index,
        })
        .collect();

    let detail = visible
        .get(state.selected_index)
        .map(|ticket| compute_detail(state, ticket));

    let counts = FilterMode::ALL_MODES
        .iter()
        .map(|&mode| (mode, filter_tickets(&state.tickets, mode).len()))
        .collect();

    DashboardViewModel {
        header: HeaderViewModel {
            analytics: state.analytics,
            sentiment: aggregate_sentiment(&state.tickets),
            ticket_count: state.tickets.len(),
        },
        filter_bar: FilterBarViewModel {
            active: state.filter,
            counts,
        },
        list: ListViewModel {
            rows,
            filtered_count: visible.len(),
            selected_index: state.selected_index,
            scroll_offset: state.scroll_offset,
        },
        detail,
        load_error: state.load_error.clone(),
        notice: state.notice.clone(),
        toast: state.toast.clone(),
        show_help: state.show_help,
        editing: state.editing,
        is_loading: state.loading,
        shortcuts: compute_shortcuts(state),
    }
}

fn compute_detail(state: &DashboardState, ticket: &Ticket) -> DetailViewModel {
    let draft = state.draft_for(ticket).to_string();
    DetailViewModel {
        id: ticket.id.clone(),
        subject: sanitize_inline(&ticket.subject),
        sender: sanitize_inline(&ticket.sender),
        received: ticket.received_display(),
        priority: ticket.priority_or_default(),
        sentiment: ticket.sentiment_or_default(),
        status: ticket.status,
        status_label: ticket.status_label(),
        body: sanitize_body(&ticket.body),
        phone: sanitize_inline(ticket.phone_display()),
        alt_email: sanitize_inline(ticket.alt_email_display()),
        requirements: sanitize_inline(ticket.requirements_display()),
        draft_edited: draft != ticket.draft_reply,
        draft,
        approved: ticket.is_approved(),
        can_resolve: ticket.can_resolve(),
    }
}

/// Footer shortcuts for the current mode
pub fn compute_shortcuts(state: &DashboardState) -> Vec<Shortcut> {
    if state.notice.is_some() {
        return vec![Shortcut::new("Enter/Esc", "Dismiss")];
    }

    if state.show_help {
        return vec![Shortcut::new("Esc/?", "Close help")];
    }

    if state.editing {
        return vec![
            Shortcut::new("Ctrl+S", "Save & Approve"),
            Shortcut::new("Esc", "Stop editing"),
        ];
    }

    let mut shortcuts = vec![
        Shortcut::new("j/k", "Move"),
        Shortcut::new("1-4", "Filter"),
        Shortcut::new("e", "Edit draft"),
        Shortcut::new("a", "Save & Approve"),
    ];
    if state.selected_ticket().is_some_and(Ticket::can_resolve) {
        shortcuts.push(Shortcut::new("x", "Mark Resolved"));
    }
    shortcuts.extend([
        Shortcut::new("r", "Refresh"),
        Shortcut::new("?", "Help"),
        Shortcut::new("q", "Quit"),
    ]);
    shortcuts
}

// ============================================================================
// Reducer
// ============================================================================

/// Pure function: reduce state with action
///
/// Contains only state transitions. Actions that need network I/O are
/// recognized by [`action_effect`] and executed by the component.
pub fn reduce_dashboard_state(
    mut state: DashboardState,
    action: DashboardAction,
    list_height: usize,
) -> DashboardState {
    if !action.is_async_result() {
        state.toast = None;
    }

    let visible_count = state.visible_tickets().len();

    match action {
        // Navigation
        DashboardAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        DashboardAction::MoveDown => {
            if visible_count > 0 {
                state.selected_index = (state.selected_index + 1).min(visible_count - 1);
            }
        }
        DashboardAction::GoToTop => {
            state.selected_index = 0;
        }
        DashboardAction::GoToBottom => {
            state.selected_index = visible_count.saturating_sub(1);
        }
        DashboardAction::PageUp => {
            let jump = (list_height / 2).max(1);
            state.selected_index = state.selected_index.saturating_sub(jump);
        }
        DashboardAction::PageDown => {
            let jump = (list_height / 2).max(1);
            state.selected_index =
                (state.selected_index + jump).min(visible_count.saturating_sub(1));
        }

        // Filtering
        DashboardAction::SetFilter(mode) => {
            state.filter = mode;
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        DashboardAction::CycleFilter => {
            state.filter = state.filter.next();
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        // Draft editing
        DashboardAction::StartEditing => {
            state.editing = state.selected_ticket().is_some();
        }
        DashboardAction::StopEditing => {
            state.editing = false;
        }
        DashboardAction::EditDraft { id, text } => {
            state.drafts.insert(id, text);
        }

        // Requests: leaving the editor is the only local change
        DashboardAction::SaveReply => {
            state.editing = false;
        }
        DashboardAction::Refresh
        | DashboardAction::Resolve
        | DashboardAction::SeedDemo
        | DashboardAction::FetchMailbox
        | DashboardAction::RegenerateDraft => {}

        // Async lifecycle
        DashboardAction::ReloadStarted => {
            state.loading = true;
            state.load_error = None;
        }
        DashboardAction::SnapshotLoaded { tickets, analytics } => {
            state.tickets = tickets;
            state.analytics = analytics;
            state.loading = false;
            state.load_error = None;
            state.drafts.clear();
            state.editing = false;
        }
        DashboardAction::SnapshotFailed(message) => {
            state.loading = false;
            state.load_error = Some(message);
        }
        DashboardAction::MutationStarted(mutation) => {
            state.toast = Some(Toast::info(mutation.progress_message()));
        }
        DashboardAction::MutationSucceeded { mutation, detail } => match mutation {
            Mutation::SubmitReply { .. } => {
                state.toast = None;
                state.notice = Some(Notice::success(
                    mutation.label(),
                    mutation.success_message(),
                ));
            }
            _ => {
                let message = detail
                    .filter(|d| !d.trim().is_empty())
                    .map(|d| sanitize_inline(&d))
                    .unwrap_or_else(|| mutation.success_message());
                state.toast = Some(Toast::success(message));
            }
        },
        DashboardAction::MutationFailed { mutation, message } => {
            state.toast = None;
            state.notice = Some(Notice::error(
                format!("{} failed", mutation.label()),
                message,
            ));
        }
        DashboardAction::DraftRegenerated { id, text } => {
            state.drafts.insert(id, text);
            state.toast = Some(Toast::success("Draft regenerated"));
        }

        // Modals
        DashboardAction::DismissNotice => {
            state.notice = None;
        }
        DashboardAction::ShowHelp => {
            state.show_help = true;
        }
        DashboardAction::HideHelp => {
            state.show_help = false;
        }

        DashboardAction::Quit => {
            state.should_exit = true;
        }
    }

    // Keep the selection inside the (possibly changed) filtered list
    let visible_count = state.visible_tickets().len();
    if visible_count == 0 {
        state.selected_index = 0;
        state.editing = false;
    } else if state.selected_index >= visible_count {
        state.selected_index = visible_count - 1;
    }
    state.scroll_offset = adjust_scroll(state.scroll_offset, state.selected_index, list_height);

    state
}

/// Adjust scroll offset to keep selected item visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Convert a key event to a DashboardAction (pure function)
///
/// Modal states capture input first. While the draft editor has focus,
/// character keys belong to the text input and map to nothing here.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &DashboardState,
) -> Option<DashboardAction> {
    if state.notice.is_some() {
        return match code {
            KeyCode::Esc | KeyCode::Enter => Some(DashboardAction::DismissNotice),
            _ => None,
        };
    }

    if state.show_help {
        return match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(DashboardAction::HideHelp),
            _ => None,
        };
    }

    if state.editing {
        return editor_key_to_action(code, modifiers);
    }

    normal_key_to_action(code, modifiers)
}

fn editor_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<DashboardAction> {
    match (code, modifiers) {
        (KeyCode::Esc, _) => Some(DashboardAction::StopEditing),
        (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => {
            Some(DashboardAction::SaveReply)
        }
        _ => None,
    }
}

fn normal_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<DashboardAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(DashboardAction::Quit),
            KeyCode::Char('d') => Some(DashboardAction::PageDown),
            KeyCode::Char('u') => Some(DashboardAction::PageUp),
            _ => None,
        };
    }

    if modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(DashboardAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(DashboardAction::GoToBottom),
        KeyCode::PageUp => Some(DashboardAction::PageUp),
        KeyCode::PageDown => Some(DashboardAction::PageDown),

        // Filtering
        KeyCode::Char(c @ '1'..='4') => FilterMode::from_digit(c).map(DashboardAction::SetFilter),
        KeyCode::Char('f') | KeyCode::Tab => Some(DashboardAction::CycleFilter),

        // Draft
        KeyCode::Char('e') | KeyCode::Enter => Some(DashboardAction::StartEditing),
        KeyCode::Char('a') => Some(DashboardAction::SaveReply),
        KeyCode::Char('D') => Some(DashboardAction::RegenerateDraft),

        // Operations
        KeyCode::Char('x') => Some(DashboardAction::Resolve),
        KeyCode::Char('r') => Some(DashboardAction::Refresh),
        KeyCode::Char('S') => Some(DashboardAction::SeedDemo),
        KeyCode::Char('F') => Some(DashboardAction::FetchMailbox),

        // Modals
        KeyCode::Char('?') => Some(DashboardAction::ShowHelp),

        // App
        KeyCode::Char('q') => Some(DashboardAction::Quit),

        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
