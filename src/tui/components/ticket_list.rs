//! Scrollable ticket list component
//!
//! Displays the visible window of the filtered ticket list with selection
//! highlighting and "more above/below" indicators.

use iocraft::prelude::*;

use crate::dashboard::model::TicketRow;
use crate::tui::theme::theme;
use crate::types::Priority;

/// Props for the TicketList component
#[derive(Default, Props)]
pub struct TicketListProps {
    /// Rows inside the visible window
    pub rows: Vec<TicketRow>,
    /// Length of the whole filtered list
    pub total: usize,
    /// Index of the first visible row in the filtered list
    pub scroll_offset: usize,
    /// Whether the list has focus
    pub has_focus: bool,
}

/// Scrollable ticket list with selection
#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let above = props.scroll_offset;
    let below = props
        .total
        .saturating_sub(props.scroll_offset + props.rows.len());

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            View(height: 1, padding_left: 1) {
                Text(
                    content: if above > 0 { format!("  {} more above", above) } else { String::new() },
                    color: theme.text_dimmed,
                )
            }

            #(props.rows.iter().map(|row| element! {
                TicketListRow(row: row.clone(), has_focus: props.has_focus)
            }))

            View(flex_grow: 1.0)

            View(height: 1, padding_left: 1) {
                Text(
                    content: if below > 0 { format!("  {} more below", below) } else { String::new() },
                    color: theme.text_dimmed,
                )
            }
        }
    }
}

/// Props for a single ticket row
#[derive(Default, Props)]
pub struct TicketListRowProps {
    pub row: TicketRow,
    pub has_focus: bool,
}

/// Single ticket row: marker, id, status, priority flag, sender and subject
#[component]
pub fn TicketListRow(props: &TicketListRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let row = &props.row;

    let highlighted = row.is_selected && props.has_focus;
    let bg_color = if row.is_selected {
        Some(if props.has_focus {
            theme.highlight
        } else {
            theme.border
        })
    } else {
        None
    };
    let text_color = theme.text;
    let indicator = if row.is_selected { ">" } else { " " };

    let urgent_flag = match row.priority {
        Priority::Urgent => "!",
        Priority::NotUrgent => " ",
    };

    let subject = if row.subject.is_empty() {
        "(no subject)".to_string()
    } else {
        row.subject.clone()
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }

            View(width: 7, flex_shrink: 0.0) {
                Text(
                    content: format!("#{:<5}", row.id),
                    color: if highlighted { text_color } else { theme.id_color },
                )
            }

            View(width: 11, flex_shrink: 0.0) {
                Text(
                    content: format!("[{}]", row.status_label),
                    color: if highlighted { text_color } else { theme.status_color(row.status) },
                )
            }

            View(width: 2, flex_shrink: 0.0) {
                Text(
                    content: urgent_flag,
                    color: theme.priority_color(row.priority),
                    weight: Weight::Bold,
                )
            }

            View(width: 24, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(content: row.sender.clone(), color: theme.text_dimmed)
            }

            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(content: format!(" {}", subject), color: text_color)
            }
        }
    }
}
