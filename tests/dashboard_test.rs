//! Dashboard session tests
//!
//! Drives the dashboard the way the TUI component does: key press ->
//! `key_to_action` -> `action_effect` (against the pre-action state) ->
//! reducer, then runs the requested effect against an in-memory backend and
//! reduces its result actions.

mod common;

use iocraft::prelude::{KeyCode, KeyModifiers};

use common::fake_api::FakeApi;
use common::mock_data::{TicketBuilder, mock_analytics};
use support_dash::dashboard::sync::{reload, run_mutation};
use support_dash::dashboard::{
    DashboardAction, DashboardState, Effect, FilterMode, action_effect,
    compute_dashboard_view_model, key_to_action, reduce_dashboard_state,
};
use support_dash::types::{Priority, Sentiment, TicketId, TicketStatus};

const LIST_HEIGHT: usize = 5;

struct Session {
    api: FakeApi,
    state: DashboardState,
}

impl Session {
    async fn start(api: FakeApi) -> Self {
        let mut session = Self {
            api,
            state: DashboardState::default(),
        };
        session.run_effect(Effect::Reload).await;
        session
    }

    fn dispatch(&mut self, action: DashboardAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce_dashboard_state(state, action, LIST_HEIGHT);
    }

    async fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Reload => {
                self.dispatch(DashboardAction::ReloadStarted);
                let loaded = reload(&self.api).await;
                self.dispatch(loaded);
            }
            Effect::Mutate(mutation) => {
                self.dispatch(DashboardAction::MutationStarted(mutation.clone()));
                let Self { api, state } = self;
                run_mutation(api, mutation, |action| {
                    let current = std::mem::take(state);
                    *state = reduce_dashboard_state(current, action, LIST_HEIGHT);
                })
                .await;
            }
        }
    }

    async fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let Some(action) = key_to_action(code, modifiers, &self.state) else {
            return;
        };
        let effect = action_effect(&self.state, &action);
        self.dispatch(action);
        if let Some(effect) = effect {
            self.run_effect(effect).await;
        }
    }

    async fn press(&mut self, c: char) {
        self.press_with(KeyCode::Char(c), KeyModifiers::NONE).await;
    }

    fn type_draft(&mut self, text: &str) {
        let id = self.state.selected_ticket().unwrap().id.clone();
        self.dispatch(DashboardAction::EditDraft {
            id,
            text: text.to_string(),
        });
    }

    fn selected_id(&self) -> Option<String> {
        self.state.selected_ticket().map(|t| t.id.to_string())
    }
}

fn inbox() -> FakeApi {
    FakeApi::new(
        vec![
            TicketBuilder::new("1")
                .subject("Refund request")
                .urgent()
                .sentiment(Some(Sentiment::Negative))
                .build(),
            TicketBuilder::new("2").subject("Thanks!").sentiment(Some(Sentiment::Positive)).build(),
            TicketBuilder::new("3")
                .subject("Invoice copy")
                .priority(None)
                .sentiment(None)
                .resolved()
                .build(),
            TicketBuilder::new("4").subject("Login broken").urgent().build(),
        ],
        mock_analytics(4, 3, 1),
    )
}

#[tokio::test]
async fn test_filter_keys_narrow_the_list() {
    let mut session = Session::start(inbox()).await;
    assert_eq!(session.state.visible_tickets().len(), 4);

    session.press('2').await;
    assert_eq!(session.state.filter, FilterMode::Urgent);
    let ids: Vec<&str> = session.state.visible_tickets().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);

    session.press('4').await;
    let ids: Vec<&str> = session.state.visible_tickets().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);

    session.press('f').await;
    assert_eq!(session.state.filter, FilterMode::All);
}

#[tokio::test]
async fn test_edit_then_save_sends_edited_draft_and_reloads_once() {
    let mut session = Session::start(inbox()).await;
    session.press('j').await;
    assert_eq!(session.selected_id().as_deref(), Some("2"));

    session.press('e').await;
    assert!(session.state.editing);
    session.type_draft("Glad we could help!");

    // Plain characters belong to the editor
    session.press('q').await;
    assert!(!session.state.should_exit);

    session
        .press_with(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .await;

    assert!(session.api.calls().contains(&"submit_reply 2".to_string()));
    assert_eq!(session.api.count("fetch_tickets"), 2);
    let saved = session.api.ticket("2").unwrap();
    assert_eq!(saved.final_reply.as_deref(), Some("Glad we could help!"));
    assert!(!session.state.editing);
    assert!(session.state.drafts.is_empty());
    assert_eq!(
        session.state.notice.as_ref().map(|n| n.message.as_str()),
        Some("Saved & approved")
    );

    // The notice blocks other keys until dismissed
    session.press('x').await;
    assert_eq!(session.api.count("set_status"), 0);
    session.press_with(KeyCode::Enter, KeyModifiers::NONE).await;
    assert!(session.state.notice.is_none());
}

#[tokio::test]
async fn test_resolve_marks_selected_ticket() {
    let mut session = Session::start(inbox()).await;

    session.press('x').await;

    assert_eq!(session.api.calls().last().map(String::as_str), Some("fetch_analytics"));
    assert!(session.api.calls().contains(&"set_status 1 Resolved".to_string()));
    assert_eq!(
        session.state.tickets[0].status,
        Some(TicketStatus::Resolved)
    );
}

#[tokio::test]
async fn test_resolve_is_not_offered_for_resolved_ticket() {
    let mut session = Session::start(inbox()).await;
    session.press('4').await;
    assert_eq!(session.selected_id().as_deref(), Some("3"));

    session.press('x').await;

    assert_eq!(session.api.count("set_status"), 0);
    assert_eq!(session.api.count("fetch_tickets"), 1);
}

#[tokio::test]
async fn test_resolving_under_pending_filter_moves_selection() {
    let mut session = Session::start(inbox()).await;
    session.press('3').await;
    session.press('G').await;
    assert_eq!(session.selected_id().as_deref(), Some("4"));

    session.press('x').await;

    // Ticket 4 left the pending view; the selection stays in bounds
    let ids: Vec<&str> = session.state.visible_tickets().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(session.selected_id().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_failed_save_keeps_draft_and_shows_error() {
    let mut session = Session::start(inbox().fail_on("submit_reply")).await;
    session.press('e').await;
    session.type_draft("Refund issued");
    session
        .press_with(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .await;

    let notice = session.state.notice.clone().unwrap();
    assert_eq!(notice.title, "Save & Approve failed");
    assert_eq!(session.api.count("fetch_tickets"), 1);
    let ticket = session.state.tickets[0].clone();
    assert_eq!(session.state.draft_for(&ticket), "Refund issued");
}

#[tokio::test]
async fn test_regenerate_draft_key() {
    let mut session = Session::start(inbox()).await;

    session.press('D').await;

    let ticket = session.state.tickets[0].clone();
    assert_eq!(session.state.draft_for(&ticket), "Fresh draft for 1");
    let vm = compute_dashboard_view_model(&session.state, LIST_HEIGHT);
    assert!(vm.detail.unwrap().draft_edited);
}

#[tokio::test]
async fn test_seed_and_fetch_keys_reload() {
    let mut session = Session::start(
        inbox()
            .with_seed(vec![TicketBuilder::new("100").build()])
            .with_mailbox_message("No new mail"),
    )
    .await;

    session.press('F').await;
    assert_eq!(
        session.state.toast.as_ref().map(|t| t.message.as_str()),
        Some("No new mail")
    );

    session.press('S').await;
    assert_eq!(session.state.tickets.len(), 1);
    assert_eq!(session.api.count("fetch_tickets"), 3);
}

#[tokio::test]
async fn test_refresh_key_reloads() {
    let mut session = Session::start(inbox()).await;
    session
        .api
        .set_tickets(vec![TicketBuilder::new("9").subject("New one").build()]);

    session.press('r').await;

    assert_eq!(session.selected_id().as_deref(), Some("9"));
}

#[tokio::test]
async fn test_quit_and_help() {
    let mut session = Session::start(inbox()).await;

    session.press('?').await;
    assert!(session.state.show_help);
    session.press('q').await;
    assert!(!session.state.should_exit);
    session.press_with(KeyCode::Esc, KeyModifiers::NONE).await;
    assert!(!session.state.show_help);

    session.press('q').await;
    assert!(session.state.should_exit);
}

#[tokio::test]
async fn test_view_model_rows_and_header() {
    let mut session = Session::start(inbox()).await;
    session.press('G').await;

    let vm = compute_dashboard_view_model(&session.state, LIST_HEIGHT);

    let rendered: Vec<String> = vm
        .list
        .rows
        .iter()
        .map(|row| {
            format!(
                "{} #{} [{}] {} {} {}",
                if row.is_selected { ">" } else { "-" },
                row.id,
                row.status_label,
                if row.priority == Priority::Urgent { "!" } else { " " },
                row.sentiment,
                row.subject
            )
        })
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    - #1 [Pending] ! Negative Refund request
    - #2 [Pending]   Positive Thanks!
    - #3 [Resolved]   Neutral Invoice copy
    > #4 [Pending] ! Neutral Login broken
    ");

    assert_eq!(vm.header.ticket_count, 4);
    assert_eq!(vm.header.sentiment.total(), 4);
    assert_eq!(vm.header.sentiment.neutral, 2);
    assert_eq!(vm.header.analytics.pending, 3);
    assert_eq!(
        vm.filter_bar.counts,
        vec![
            (FilterMode::All, 4),
            (FilterMode::Urgent, 2),
            (FilterMode::Pending, 3),
            (FilterMode::Resolved, 1),
        ]
    );
}

#[tokio::test]
async fn test_detail_body_is_sanitized() {
    let api = FakeApi::new(
        vec![
            TicketBuilder::new("1")
                .body("<p>Hi &amp; hello</p><script>alert(1)</script>\u{1b}[31mred")
                .build(),
        ],
        mock_analytics(1, 1, 0),
    );
    let session = Session::start(api).await;

    let vm = compute_dashboard_view_model(&session.state, LIST_HEIGHT);
    let detail = vm.detail.unwrap();

    assert_eq!(detail.id, TicketId::new("1"));
    assert!(!detail.body.contains('<'));
    assert!(!detail.body.contains("alert"));
    assert!(!detail.body.contains('\u{1b}'));
    assert!(detail.body.contains("Hi & hello"));
    assert_eq!(detail.phone, "-");
}
