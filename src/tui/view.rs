//! Dashboard view (`support-dash dashboard`)
//!
//! Owns the single [`DashboardState`], translates key presses into
//! [`DashboardAction`]s and runs the network effects those actions request.

use iocraft::prelude::*;

use crate::api::HttpSupportClient;
use crate::dashboard::model::{DashboardAction, DashboardState, Effect};
use crate::dashboard::{
    FilterMode, action_effect, compute_dashboard_view_model, key_to_action,
    reduce_dashboard_state, sync,
};
use crate::tui::components::{
    EmptyState, EmptyStateKind, FilterBar, Footer, Header, HelpModal, NoticeModal, StatsPanel,
    TicketDetail, TicketList, render_toast,
};
use crate::tui::theme::theme;
use crate::types::TicketId;

/// Rows outside the list body: header (1), stats (4), filter bar (1),
/// error banner (1), toast (1), footer (1), list borders (2) and the
/// "more above/below" lines (2)
const CHROME_ROWS: u16 = 13;

/// Share of the width given to the ticket list
const LIST_WIDTH_PCT: u16 = 45;

/// Reduce `action` into the shared state.
fn dispatch(state: &mut State<DashboardState>, action: DashboardAction, list_height: usize) {
    let current = state.read().clone();
    state.set(reduce_dashboard_state(current, action, list_height));
}

/// Props for the Dashboard component
#[derive(Default, Props)]
pub struct DashboardProps {
    pub client: Option<HttpSupportClient>,
    /// Base URL shown in the header
    pub endpoint: String,
}

/// Main dashboard component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header                                   |
/// | Stats cards          | Sentiment chart   |
/// | Filter tabs                              |
/// +-------------------+----------------------+
/// | TicketList        | TicketDetail         |
/// |                   |   body               |
/// |                   |   draft editor       |
/// +-------------------+----------------------+
/// | Toast / Footer                           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Dashboard<'a>(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let mut state: State<DashboardState> = hooks.use_state(DashboardState::default);

    let list_height = height.saturating_sub(CHROME_ROWS) as usize;

    // Runs one reload or mutation and feeds its results through the reducer
    let effect_handler: Handler<Effect> = hooks.use_async_handler({
        let client = props.client.clone();

        move |effect: Effect| {
            let client = client.clone();
            let mut state = state;

            async move {
                let Some(client) = client else {
                    return;
                };
                match effect {
                    Effect::Reload => {
                        dispatch(&mut state, DashboardAction::ReloadStarted, list_height);
                        let loaded = sync::reload(&client).await;
                        dispatch(&mut state, loaded, list_height);
                    }
                    Effect::Mutate(mutation) => {
                        dispatch(
                            &mut state,
                            DashboardAction::MutationStarted(mutation.clone()),
                            list_height,
                        );
                        sync::run_mutation(&client, mutation, |action| {
                            dispatch(&mut state, action, list_height)
                        })
                        .await;
                    }
                }
            }
        }
    });

    // Draft edits come from the editor component
    let draft_handler: Handler<(TicketId, String)> = hooks.use_async_handler({
        move |(id, text): (TicketId, String)| {
            let mut state = state;
            async move {
                dispatch(&mut state, DashboardAction::EditDraft { id, text }, list_height);
            }
        }
    });

    // Initial load on mount
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        effect_handler.clone()(Effect::Reload);
    }

    hooks.use_terminal_events({
        let effect_handler = effect_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let current = state.read().clone();
                let Some(action) = key_to_action(code, modifiers, &current) else {
                    return;
                };
                let effect = action_effect(&current, &action);
                state.set(reduce_dashboard_state(current, action, list_height));
                if let Some(effect) = effect {
                    effect_handler.clone()(effect);
                }
            }
            _ => {}
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    let vm = compute_dashboard_view_model(&state.read(), list_height);

    let empty_kind = if vm.list.filtered_count > 0 {
        None
    } else if vm.is_loading && vm.header.ticket_count == 0 {
        Some(EmptyStateKind::Loading)
    } else if vm.header.ticket_count == 0 || vm.filter_bar.active == FilterMode::All {
        Some(EmptyStateKind::NoTickets)
    } else {
        Some(EmptyStateKind::NoMatches(vm.filter_bar.active))
    };

    let list_width = (width as u32 * LIST_WIDTH_PCT as u32 / 100) as u16;

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
        ) {
            Header(
                endpoint: Some(props.endpoint.clone()),
                ticket_count: Some(vm.header.ticket_count),
                loading: vm.is_loading,
            )

            StatsPanel(analytics: vm.header.analytics, sentiment: vm.header.sentiment)

            FilterBar(active: vm.filter_bar.active, counts: vm.filter_bar.counts.clone())

            View(height: 1, flex_shrink: 0.0, padding_left: 1) {
                #(vm.load_error.clone().map(|message| element! {
                    Text(content: format!("! {}", message), color: theme.error)
                }))
            }

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
            ) {
                View(width: list_width, height: 100pct) {
                    #(Some(match empty_kind {
                        Some(kind) => element! {
                            View(
                                width: 100pct,
                                height: 100pct,
                                border_style: BorderStyle::Round,
                                border_color: theme.border,
                            ) {
                                EmptyState(kind)
                            }
                        }
                        .into_any(),
                        None => element! {
                            TicketList(
                                rows: vm.list.rows.clone(),
                                total: vm.list.filtered_count,
                                scroll_offset: vm.list.scroll_offset,
                                has_focus: !vm.editing,
                            )
                        }
                        .into_any(),
                    }))
                }
                View(flex_grow: 1.0, height: 100pct) {
                    TicketDetail(
                        detail: vm.detail.clone(),
                        editing: vm.editing,
                        on_draft_change: Some(draft_handler),
                    )
                }
            }

            View(height: 1, flex_shrink: 0.0) {
                #(render_toast(&vm.toast))
            }

            Footer(shortcuts: vm.shortcuts.clone())

            #(vm.notice.clone().map(|notice| element! {
                NoticeModal(notice: Some(notice))
            }))

            #(vm.show_help.then(|| element! {
                HelpModal
            }))
        }
    }
}
