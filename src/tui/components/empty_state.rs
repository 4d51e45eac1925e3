//! Placeholder shown in the list pane when there is nothing to list.

use iocraft::prelude::*;

use crate::dashboard::FilterMode;
use crate::tui::theme::theme;

/// Why the list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// First load still in flight
    #[default]
    Loading,
    /// The server returned no tickets
    NoTickets,
    /// Tickets exist but none match the active filter
    NoMatches(FilterMode),
}

impl EmptyStateKind {
    /// `(icon, title, message, hint)`
    fn text(self) -> (&'static str, &'static str, String, &'static str) {
        match self {
            EmptyStateKind::Loading => ("~", "Loading", "Loading tickets...".to_string(), ""),
            EmptyStateKind::NoTickets => (
                "i",
                "No Tickets",
                "The inbox is empty.".to_string(),
                "Press 'S' to seed demo data or 'F' to fetch the mailbox.",
            ),
            EmptyStateKind::NoMatches(mode) => (
                "?",
                "No Matches",
                format!("No tickets match the '{}' filter.", mode.label()),
                "Press '1' to show all tickets.",
            ),
        }
    }
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (icon, title, message, hint) = props.kind.text();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 1,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: theme.text_dimmed, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            View(margin_top: 1, max_width: 50) {
                Text(content: message, color: theme.text_dimmed)
            }

            #((!hint.is_empty()).then(|| element! {
                View(margin_top: 1, max_width: 50) {
                    Text(content: hint, color: theme.text_dimmed)
                }
            }))
        }
    }
}
